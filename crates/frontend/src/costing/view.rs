use super::api;
use super::machine::SubmitMachine;
use super::snapshot::FormSnapshot;
use super::store::{FormStateStore, LocalStorageBackend};
use contracts::costing::{
    BLADDER_TYPE_OPTIONS, FIELD_BLADDER_TYPE, FIELD_FOAM_THICKNESS, FIELD_MATERIAL_THICKNESS,
    FIELD_PANEL_CONFIG, FIELD_PROCESS, FIELD_QUANTITY, FIELD_SUPPLIER, FOAM_THICKNESS_OPTIONS,
    MATERIAL_THICKNESS_OPTIONS, PANEL_CONFIG_OPTIONS, PROCESS_OPTIONS, SUPPLIER_OPTIONS,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// One select bound to a snapshot field. Changing it replaces the snapshot
/// wholesale and persists the new one.
#[component]
fn SelectField(
    form: RwSignal<FormSnapshot>,
    store: FormStateStore<LocalStorageBackend>,
    label: &'static str,
    field: &'static str,
    options: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field>{label}</label>
            <select
                id=field
                name=field
                prop:value=move || form.get().get(field).unwrap_or_default().to_string()
                on:change=move |ev| {
                    form.update(|f| *f = f.clone().with_field(field, event_target_value(&ev)));
                    store.persist(&form.get_untracked());
                }
            >
                {options
                    .iter()
                    .map(|opt| {
                        view! {
                            <option
                                value=*opt
                                selected=move || form.get().get(field) == Some(*opt)
                            >
                                {*opt}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// The cost-estimation form: selection fields, quantity, save/reset controls,
/// and the status and total-price readouts driven by the submit machine.
#[component]
pub fn CostingForm() -> impl IntoView {
    let store = FormStateStore::new(LocalStorageBackend);

    // One restore pass on mount seeds the form; a corrupt or absent slot
    // leaves the defaults in place.
    let initial = match store.restore() {
        Some(saved) => FormSnapshot::form_defaults().merged_with_saved(&saved),
        None => FormSnapshot::form_defaults(),
    };
    let form = RwSignal::new(initial);
    let machine = RwSignal::new(SubmitMachine::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Reject a second submit while one is in flight.
        let mut started = false;
        machine.update(|m| started = m.begin_submit());
        if !started {
            return;
        }

        // Captured synchronously: edits during the pending call must not
        // change the in-flight request.
        let snapshot = form.get_untracked();
        spawn_local(async move {
            match api::save_costing(&snapshot).await {
                Ok(response) => machine.update(|m| m.complete_success(&response, &snapshot)),
                Err(err) => machine.update(|m| m.complete_error(err.message())),
            }
        });
    };

    // Hard reset: drop the persisted slot, then reload to a blank form,
    // discarding all in-memory state including any in-flight save.
    let on_reset = move |_| {
        store.clear();
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <form id="costForm" on:submit=on_submit>
            <SelectField form=form store=store label="Process" field=FIELD_PROCESS options=PROCESS_OPTIONS />
            <SelectField form=form store=store label="Supplier" field=FIELD_SUPPLIER options=SUPPLIER_OPTIONS />
            <SelectField form=form store=store label="Material thickness (mm)" field=FIELD_MATERIAL_THICKNESS options=MATERIAL_THICKNESS_OPTIONS />
            <SelectField form=form store=store label="Foam thickness (mm)" field=FIELD_FOAM_THICKNESS options=FOAM_THICKNESS_OPTIONS />
            <SelectField form=form store=store label="Bladder type" field=FIELD_BLADDER_TYPE options=BLADDER_TYPE_OPTIONS />
            <SelectField form=form store=store label="Panel configuration" field=FIELD_PANEL_CONFIG options=PANEL_CONFIG_OPTIONS />

            <div class="form-group">
                <label for=FIELD_QUANTITY>"Quantity"</label>
                <input
                    type="number"
                    id=FIELD_QUANTITY
                    name=FIELD_QUANTITY
                    min="1"
                    step="1"
                    prop:value=move || form.get().get(FIELD_QUANTITY).unwrap_or_default().to_string()
                    on:change=move |ev| {
                        form.update(|f| {
                            *f = f.clone().with_field(FIELD_QUANTITY, event_target_value(&ev))
                        });
                        store.persist(&form.get_untracked());
                    }
                />
            </div>

            <div class="form-actions">
                <button type="submit" prop:disabled=move || machine.with(|m| m.is_saving())>
                    "Save"
                </button>
                <button type="button" id="resetBtn" on:click=on_reset>
                    "Reset"
                </button>
            </div>

            <div class="status" id="status">
                {move || machine.with(|m| m.status_text().to_string())}
            </div>
            <div class="total-price" id="totalPrice">
                {move || machine.with(|m| m.total_price_text().to_string())}
            </div>
        </form>
    }
}
