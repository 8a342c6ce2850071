use super::*;
use crate::store::MemoryStore;

const KEY: &str = "PRODUCTOS";

fn frozen() -> i64 {
    1_700_000_000_000
}

fn controller() -> ProductController<MemoryStore> {
    let store = ProductStore::new(MemoryStore::new(), KEY);
    ProductController::with_ids(store, ClockIdSource::with_clock(frozen))
}

fn fill(state: &mut CatalogState, title: &str, description: &str, price: &str) {
    state.form.title = title.to_owned();
    state.form.description = description.to_owned();
    state.form.price = price.to_owned();
}

fn raw(ctl: &ProductController<MemoryStore>) -> Option<String> {
    ctl.store().backend().get_item(KEY).unwrap()
}

fn assert_store_mirrors(ctl: &ProductController<MemoryStore>, state: &CatalogState) {
    assert_eq!(ctl.store().load(), state.products);
}

/// Controller + state holding "Pen", "Cup", "Hat" in that order.
fn seeded() -> (ProductController<MemoryStore>, CatalogState) {
    let mut ctl = controller();
    let mut state = CatalogState::default();
    for (title, price) in [("Pen", "12.50"), ("Cup", "3"), ("Hat", "20")] {
        ctl.open_create(&mut state);
        fill(&mut state, title, &format!("{title} description"), price);
        ctl.submit(&mut state);
    }
    (ctl, state)
}

fn ids(state: &CatalogState) -> Vec<ProductId> {
    state.products.iter().map(|p| p.id).collect()
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_reports_first_blank_field_in_order() {
    let form = ProductForm::default();
    assert_eq!(validate(&form), Err(CatalogError::Validation { field: Field::Title }));

    let form = ProductForm { title: "Pen".into(), ..ProductForm::default() };
    assert_eq!(validate(&form), Err(CatalogError::Validation { field: Field::Description }));

    let form = ProductForm { title: "Pen".into(), description: "Blue".into(), price: String::new() };
    assert_eq!(validate(&form), Err(CatalogError::Validation { field: Field::Price }));
}

#[test]
fn validate_treats_whitespace_as_blank_and_trims() {
    let form = ProductForm { title: "   ".into(), description: "Blue".into(), price: "1".into() };
    assert_eq!(validate(&form), Err(CatalogError::Validation { field: Field::Title }));

    let form = ProductForm { title: " Pen ".into(), description: " Blue pen ".into(), price: " 12.50 ".into() };
    let fields = validate(&form).unwrap();
    assert_eq!(fields.title, "Pen");
    assert_eq!(fields.description, "Blue pen");
    assert!((fields.price - 12.5).abs() < f64::EPSILON);
}

#[test]
fn validate_rejects_non_numeric_price() {
    let form = ProductForm { title: "Pen".into(), description: "Blue".into(), price: "twelve".into() };
    assert_eq!(validate(&form), Err(CatalogError::InvalidPrice { input: "twelve".into() }));
}

// =============================================================
// load
// =============================================================

#[test]
fn load_malformed_store_yields_empty_list_without_events() {
    let mut ctl = controller();
    ctl.store().backend().set_item(KEY, "not json at all").unwrap();
    let mut state = CatalogState::default();
    ctl.load(&mut state);
    assert!(state.products.is_empty());
}

#[test]
fn load_observes_existing_ids() {
    let mut ctl = controller();
    ctl.store()
        .backend()
        .set_item(KEY, &format!(r#"[{{"id":{},"title":"Pen","description":"x","price":1}}]"#, frozen() + 50))
        .unwrap();
    let mut state = CatalogState::default();
    ctl.load(&mut state);
    assert_eq!(state.products.len(), 1);

    ctl.open_create(&mut state);
    fill(&mut state, "Cup", "Mug", "2");
    ctl.submit(&mut state);
    assert_eq!(state.products[1].id, frozen() + 51);
}

#[test]
fn create_after_max_id_reports_exhausted_ids() {
    let mut ctl = controller();
    let stored = format!(r#"[{{"id":{},"title":"Pen","description":"x","price":1}}]"#, i64::MAX);
    ctl.store().backend().set_item(KEY, &stored).unwrap();
    let mut state = CatalogState::default();
    ctl.load(&mut state);
    assert_eq!(state.products.len(), 1);

    ctl.open_create(&mut state);
    fill(&mut state, "Cup", "Mug", "2");
    let events = ctl.submit(&mut state);

    assert_eq!(events, vec![CatalogEvent::Notify(Notification::error("Could not save the catalog"))]);
    assert_eq!(state.products.len(), 1);
    assert_eq!(state.modal, ModalMode::Create);
    assert_eq!(raw(&ctl).as_deref(), Some(stored.as_str()));
}

// =============================================================
// modal state machine
// =============================================================

#[test]
fn open_create_clears_form() {
    let ctl = controller();
    let mut state = CatalogState::default();
    fill(&mut state, "stale", "stale", "1");
    ctl.open_create(&mut state);
    assert_eq!(state.modal, ModalMode::Create);
    assert_eq!(state.form, ProductForm::default());
    assert_eq!(state.modal_title(), "Register Product");
}

#[test]
fn open_edit_prefills_form() {
    let (ctl, mut state) = seeded();
    let cup = state.products[1].clone();
    ctl.open_edit(&mut state, &cup);
    assert_eq!(state.modal, ModalMode::Edit(cup.id));
    assert_eq!(state.form.title, "Cup");
    assert_eq!(state.form.price, "3");
    assert_eq!(state.modal_title(), "Edit Product");
}

#[test]
fn close_resets_mode_and_emits_close_signal() {
    let ctl = controller();
    let mut state = CatalogState::default();
    ctl.open_create(&mut state);
    fill(&mut state, "Pen", "", "");
    assert_eq!(ctl.close(&mut state), vec![CatalogEvent::CloseModal]);
    assert_eq!(state.modal, ModalMode::Closed);
    assert_eq!(state.form, ProductForm::default());
}

#[test]
fn submit_while_closed_does_nothing() {
    let mut ctl = controller();
    let mut state = CatalogState::default();
    fill(&mut state, "Pen", "Blue pen", "1");
    assert!(ctl.submit(&mut state).is_empty());
    assert!(state.products.is_empty());
    assert_eq!(raw(&ctl), None);
}

// =============================================================
// create
// =============================================================

#[test]
fn create_appends_one_product_with_fresh_id() {
    let mut ctl = controller();
    let mut state = CatalogState::default();
    ctl.open_create(&mut state);
    fill(&mut state, "Pen", "Blue pen", "12.50");

    let events = ctl.submit(&mut state);

    assert_eq!(
        events,
        vec![CatalogEvent::Notify(Notification::success("Product saved")), CatalogEvent::CloseModal]
    );
    assert_eq!(state.products.len(), 1);
    let pen = &state.products[0];
    assert_eq!(pen.id, frozen());
    assert_eq!(pen.title, "Pen");
    assert_eq!(pen.description, "Blue pen");
    assert!((pen.price - 12.5).abs() < f64::EPSILON);
    assert_eq!(state.modal, ModalMode::Closed);
    assert_store_mirrors(&ctl, &state);
}

#[test]
fn create_with_blank_title_warns_and_leaves_store_unchanged() {
    let (mut ctl, mut state) = seeded();
    let before = raw(&ctl);

    ctl.open_create(&mut state);
    fill(&mut state, "", "Blue pen", "12.50");
    let events = ctl.submit(&mut state);

    let CatalogEvent::Notify(note) = &events[0] else {
        panic!("expected notification, got {events:?}");
    };
    assert_eq!(note.severity, Severity::Warning);
    assert_eq!(note.field, Some(Field::Title));
    assert_eq!(events[1], CatalogEvent::FocusField(Field::Title));
    assert_eq!(state.modal, ModalMode::Create);
    assert_eq!(state.products.len(), 3);
    assert_eq!(raw(&ctl), before);
}

#[test]
fn create_assigns_distinct_ids_in_same_millisecond() {
    let (_, state) = seeded();
    assert_eq!(ids(&state), vec![frozen(), frozen() + 1, frozen() + 2]);
}

#[test]
fn create_with_failing_store_keeps_modal_open_and_list_intact() {
    let (mut ctl, mut state) = seeded();
    ctl.store().backend().set_read_only(true);

    ctl.open_create(&mut state);
    fill(&mut state, "Lamp", "Desk lamp", "30");
    let events = ctl.submit(&mut state);

    assert_eq!(events, vec![CatalogEvent::Notify(Notification::error("Could not save the catalog"))]);
    assert_eq!(state.products.len(), 3);
    assert_eq!(state.modal, ModalMode::Create);
    assert_eq!(state.form.title, "Lamp");
    assert_store_mirrors(&ctl, &state);
}

// =============================================================
// update
// =============================================================

#[test]
fn edit_description_changes_only_description() {
    let (mut ctl, mut state) = seeded();
    let cup = state.products[1].clone();

    ctl.open_edit(&mut state, &cup);
    state.form.description = "Large mug".to_owned();
    let events = ctl.submit(&mut state);

    assert_eq!(events[0], CatalogEvent::Notify(Notification::success("Product updated")));
    assert_eq!(events[1], CatalogEvent::CloseModal);
    assert_eq!(state.products.len(), 3);
    let updated = &state.products[1];
    assert_eq!(updated.id, cup.id);
    assert_eq!(updated.title, cup.title);
    assert_eq!(updated.description, "Large mug");
    assert!((updated.price - cup.price).abs() < f64::EPSILON);
    assert_store_mirrors(&ctl, &state);
}

#[test]
fn update_unknown_id_is_not_found_and_store_untouched() {
    let (mut ctl, mut state) = seeded();
    let before = raw(&ctl);
    let fields = ProductFields { title: "Ghost".into(), description: "gone".into(), price: 1.0 };

    assert_eq!(ctl.update(&mut state, 42, fields), Err(CatalogError::NotFound(42)));
    assert_eq!(raw(&ctl), before);
    assert_eq!(state.products.len(), 3);
}

#[test]
fn submit_edit_for_removed_product_reports_error() {
    let (mut ctl, mut state) = seeded();
    let cup = state.products[1].clone();
    ctl.open_edit(&mut state, &cup);
    ctl.delete(&mut state, cup.id).unwrap();

    let events = ctl.submit(&mut state);
    assert_eq!(events, vec![CatalogEvent::Notify(Notification::error("The product no longer exists"))]);
    assert_eq!(state.modal, ModalMode::Edit(cup.id));
}

// =============================================================
// delete
// =============================================================

#[test]
fn request_delete_marks_pending_and_describes_prompt() {
    let (ctl, mut state) = seeded();
    let id = state.products[0].id;
    let prompt = ctl.request_delete(&mut state, id);
    assert_eq!(state.pending_delete, Some(id));
    assert_eq!(prompt.product_id, id);
    assert_eq!(prompt.severity, Severity::Warning);
    assert_eq!(prompt.confirm_label, "Yes, delete");
    assert_eq!(prompt.cancel_label, "Cancel");
}

#[test]
fn confirmed_delete_removes_exactly_that_id_in_order() {
    let (mut ctl, mut state) = seeded();
    let [pen, cup, hat] = [0, 1, 2].map(|i| state.products[i].id);

    ctl.request_delete(&mut state, cup);
    let events = ctl.resolve_delete(&mut state, Ok(ConfirmOutcome::Confirmed));

    assert_eq!(events, vec![CatalogEvent::Notify(Notification::success("Product deleted"))]);
    assert_eq!(ids(&state), vec![pen, hat]);
    assert_eq!(state.pending_delete, None);
    assert_store_mirrors(&ctl, &state);
}

#[test]
fn cancelled_delete_leaves_store_byte_identical() {
    let (mut ctl, mut state) = seeded();
    let before = raw(&ctl);
    let id = state.products[0].id;

    ctl.request_delete(&mut state, id);
    let events = ctl.resolve_delete(&mut state, Ok(ConfirmOutcome::Cancelled));

    assert!(events.is_empty());
    assert_eq!(raw(&ctl), before);
    assert_eq!(state.products.len(), 3);
    assert_eq!(state.pending_delete, None);
}

#[test]
fn failed_prompt_surfaces_error_and_keeps_list() {
    let (mut ctl, mut state) = seeded();
    let before = raw(&ctl);
    let id = state.products[0].id;

    ctl.request_delete(&mut state, id);
    let err = CatalogError::ConfirmationFailed("dialog could not be shown".to_owned());
    let events = ctl.resolve_delete(&mut state, Err(err));

    assert_eq!(events, vec![CatalogEvent::Notify(Notification::error("dialog could not be shown"))]);
    assert_eq!(raw(&ctl), before);
}

#[test]
fn resolve_without_request_is_confirmation_failure() {
    let (mut ctl, mut state) = seeded();
    let events = ctl.resolve_delete(&mut state, Ok(ConfirmOutcome::Confirmed));
    let CatalogEvent::Notify(note) = &events[0] else {
        panic!("expected notification, got {events:?}");
    };
    assert_eq!(note.severity, Severity::Error);
    assert_eq!(state.products.len(), 3);
}

// =============================================================
// round-trip law
// =============================================================

#[test]
fn store_mirrors_memory_after_every_operation() {
    let mut ctl = controller();
    let mut state = CatalogState::default();
    ctl.load(&mut state);
    assert_store_mirrors(&ctl, &state);

    for (title, price) in [("Pen", "1"), ("Cup", "2.25"), ("Hat", "300")] {
        ctl.open_create(&mut state);
        fill(&mut state, title, "desc", price);
        ctl.submit(&mut state);
        assert_store_mirrors(&ctl, &state);
    }

    let hat = state.products[2].clone();
    ctl.open_edit(&mut state, &hat);
    state.form.price = "299.99".to_owned();
    ctl.submit(&mut state);
    assert_store_mirrors(&ctl, &state);

    let pen = state.products[0].id;
    ctl.request_delete(&mut state, pen);
    ctl.resolve_delete(&mut state, Ok(ConfirmOutcome::Confirmed));
    assert_store_mirrors(&ctl, &state);

    let mut reloaded = CatalogState::default();
    ctl.load(&mut reloaded);
    assert_eq!(reloaded.products, state.products);
}
