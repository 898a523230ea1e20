use insta::assert_snapshot;

use crate::{currency, purchase::row::DEFAULT_QTY};

use super::*;

const DATE: &str = "2024-05-01";

fn row(id: RowId, brand: &str, price: u64, qty: u64) -> PurchaseRow {
    PurchaseRow {
        id,
        brand: brand.to_string(),
        spec: "8/128 GB".to_string(),
        color: "Hitam (Black)".to_string(),
        price,
        qty,
    }
}

fn assert_single_fresh_row(form: &PurchaseForm) {
    assert_eq!(form.rows().len(), 1);
    assert_eq!(form.rows()[0], PurchaseRow::empty(FIRST_ROW_ID));
}

#[test]
fn test_new_form_has_one_empty_row() {
    let form = PurchaseForm::new(DATE);
    assert_eq!(form.date(), DATE);
    assert_single_fresh_row(&form);
    assert_eq!(form.grand_total(), 0);
}

#[test]
fn test_default_form_uses_today() {
    let form = PurchaseForm::default();
    assert_eq!(form.date(), date::today());
}

#[test]
fn test_set_date() {
    let mut form = PurchaseForm::new(DATE);
    form.set_date("2024-06-30");
    assert_eq!(form.date(), "2024-06-30");
}

#[test]
fn test_add_row_uses_max_id_plus_one() {
    let mut form = PurchaseForm::with_rows(
        DATE,
        vec![
            PurchaseRow::empty(1),
            PurchaseRow::empty(3),
            PurchaseRow::empty(4),
        ],
    );

    let id = form.add_row();

    assert_eq!(id, 5);
    assert_eq!(form.rows().len(), 4);
    assert_eq!(form.rows()[3], PurchaseRow::empty(5));
}

#[test]
fn test_add_row_appends_in_order() {
    let mut form = PurchaseForm::new(DATE);
    form.add_row();
    form.add_row();
    let ids: Vec<RowId> = form.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_remove_row_keeps_other_ids() {
    let mut form = PurchaseForm::new(DATE);
    form.add_row();
    form.add_row();

    form.remove_row(2);

    let ids: Vec<RowId> = form.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);

    // ids are derived from the current max, not a global counter
    assert_eq!(form.add_row(), 4);
}

#[test]
fn test_remove_unknown_row_is_noop() {
    let mut form = PurchaseForm::new(DATE);
    form.add_row();
    let before = form.clone();

    form.remove_row(42);

    assert_eq!(form, before);
}

#[test]
fn test_remove_last_row_resets() {
    let mut form = PurchaseForm::with_rows(DATE, vec![row(9, "POCO F5", 10, 3)]);

    form.remove_row(9);

    assert_single_fresh_row(&form);
}

#[test]
fn test_remove_last_row_resets_regardless_of_id() {
    let mut form = PurchaseForm::with_rows(DATE, vec![row(4, "POCO F5", 10, 3)]);

    form.remove_row(123);

    assert_single_fresh_row(&form);
}

#[test]
fn test_update_row_is_field_level() {
    let mut form = PurchaseForm::new(DATE);
    let second = form.add_row();

    form.update_row(second, RowUpdate::Brand("Xiaomi 13T".to_string()));
    form.update_row(second, RowUpdate::Price(4_500_000));

    assert_eq!(form.rows()[0], PurchaseRow::empty(1));
    let updated = form.row(second).unwrap();
    assert_eq!(updated.brand, "Xiaomi 13T");
    assert_eq!(updated.price, 4_500_000);
    assert!(updated.spec.is_empty());
    assert_eq!(updated.qty, DEFAULT_QTY);
}

#[test]
fn test_update_unknown_row_is_noop() {
    let mut form = PurchaseForm::new(DATE);
    let before = form.clone();
    form.update_row(8, RowUpdate::Qty(3));
    assert_eq!(form, before);
}

#[test]
fn test_grand_total_tracks_operations() {
    let mut form = PurchaseForm::new(DATE);
    let expected = |f: &PurchaseForm| {
        f.rows().iter().map(|r| r.price * r.qty).sum::<u64>()
    };

    form.update_row(1, RowUpdate::Price(1_000));
    assert_eq!(form.grand_total(), expected(&form));

    let b = form.add_row();
    form.update_row(b, RowUpdate::Price(2_500));
    form.update_row(b, RowUpdate::Qty(4));
    assert_eq!(form.grand_total(), 11_000);
    assert_eq!(form.grand_total(), expected(&form));

    let c = form.add_row();
    form.update_row(c, RowUpdate::Price(300));
    form.update_row(c, RowUpdate::Qty(0));
    assert_eq!(form.grand_total(), expected(&form));

    form.remove_row(b);
    assert_eq!(form.grand_total(), 1_000);
    assert_eq!(form.grand_total(), expected(&form));

    form.remove_row(1);
    form.remove_row(c);
    assert_eq!(form.grand_total(), 0);
}

#[test]
fn test_single_complete_row_scenario() {
    let form = PurchaseForm::with_rows(
        DATE,
        vec![row(1, "iPhone 15", 15_000_000, 2)],
    );

    assert_eq!(form.grand_total(), 30_000_000);
    assert_snapshot!(currency::format(form.grand_total()), @"30.000.000");
    assert!(form.validate().is_ok());
    assert!(form.is_valid());
}

#[test]
fn test_validate_reports_incomplete_rows() {
    let mut missing_price = row(2, "POCO F5", 0, 1);
    missing_price.price = 0;
    let form = PurchaseForm::with_rows(
        DATE,
        vec![
            row(1, "iPhone 15", 15_000_000, 2),
            missing_price,
            row(3, "", 1_000, 1),
        ],
    );

    let err = form.validate().unwrap_err();

    assert_eq!(
        err,
        FormError::IncompleteRows {
            positions: vec![2, 3]
        }
    );
    assert_snapshot!(
        err.to_string(),
        @"purchase data is incomplete (item #2, #3): make sure brand, spec, color and price are filled in"
    );
}

#[test]
fn test_validate_each_required_field() {
    let base = row(1, "iPhone 15", 15_000_000, 2);

    let mut r = base.clone();
    r.spec.clear();
    assert!(!PurchaseForm::with_rows(DATE, vec![r]).is_valid());

    let mut r = base.clone();
    r.color.clear();
    assert!(!PurchaseForm::with_rows(DATE, vec![r]).is_valid());

    let mut r = base.clone();
    r.brand.clear();
    assert!(!PurchaseForm::with_rows(DATE, vec![r]).is_valid());

    let mut r = base;
    r.price = 0;
    assert!(!PurchaseForm::with_rows(DATE, vec![r]).is_valid());
}

#[test]
fn test_validate_ignores_zero_quantity() {
    let form =
        PurchaseForm::with_rows(DATE, vec![row(1, "iPhone 15", 15_000_000, 0)]);
    assert!(form.is_valid());
    assert_eq!(form.grand_total(), 0);
}

#[test]
fn test_fresh_form_is_invalid() {
    assert!(!PurchaseForm::new(DATE).is_valid());
}

#[test]
fn test_snapshot() {
    let form = PurchaseForm::with_rows(
        DATE,
        vec![row(1, "iPhone 15", 15_000_000, 2)],
    );

    let snapshot = form.snapshot();

    assert_eq!(snapshot.date, DATE);
    assert_eq!(snapshot.rows, form.rows().to_vec());
    assert_eq!(snapshot.grand_total, 30_000_000);
    assert_snapshot!(
        serde_json::to_string(&snapshot).unwrap(),
        @r#"{"date":"2024-05-01","rows":[{"id":1,"brand":"iPhone 15","spec":"8/128 GB","color":"Hitam (Black)","price":15000000,"qty":2}],"grandTotal":30000000}"#
    );
}
