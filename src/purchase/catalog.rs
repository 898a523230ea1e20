//! Fixed option lists offered by the form selects.

pub const PHONE_BRANDS: [&str; 13] = [
    "iPhone 15 Pro Max",
    "iPhone 15",
    "iPhone 14 Pro",
    "Samsung Galaxy S24 Ultra",
    "Samsung Galaxy Z Flip 5",
    "Samsung Galaxy A55",
    "Google Pixel 8 Pro",
    "Xiaomi 13T",
    "POCO F5",
    "OPPO Find N3 Flip",
    "Vivo X100 Pro",
    "Infinix GT 10 Pro",
    "Asus ROG Phone 8",
];

/// RAM/ROM configurations.
pub const PHONE_SPECS: [&str; 8] = [
    "4/64 GB",
    "6/128 GB",
    "8/128 GB",
    "8/256 GB",
    "12/256 GB",
    "12/512 GB",
    "16/512 GB",
    "1TB",
];

pub const PHONE_COLORS: [&str; 12] = [
    "Hitam (Black)",
    "Putih (White)",
    "Silver",
    "Gold",
    "Abu-abu (Grey)",
    "Biru (Blue)",
    "Hijau (Green)",
    "Merah (Red)",
    "Titanium Natural",
    "Titanium Blue",
    "Deep Purple",
    "Graphite",
];
