//! Supplier material name listing with create dialog and delete actions.

use leptos::prelude::*;

use crate::components::entity_picker::EntityPicker;
use crate::net::api::{self, Catalog};
use crate::state::catalog::{CatalogState, NameDraft};
use crate::util::date::format_date;
use crate::util::dialog;

/// Listing page for supplier-specific material names.
///
/// Fetches materials, companies, and join records together on mount and
/// mirrors each fetch outcome into a [`CatalogState`]: successful reads
/// replace all three collections at once, failed reads are logged and
/// leave the previously rendered table untouched. Create and delete both
/// refetch the whole catalog rather than patching rows locally.
#[component]
pub fn SupplierNamesPage() -> impl IntoView {
    let state = RwSignal::new(CatalogState::loading());
    let catalog = LocalResource::new(|| api::fetch_catalog());

    // Single point where fetch results reach the page.
    Effect::new(move || match catalog.get() {
        None => state.update(|s| s.loading = true),
        Some(outcome) => state.update(|s| {
            if let Err(err) = s.apply(outcome) {
                #[cfg(feature = "hydrate")]
                log::error!("catalog fetch failed: {err}");
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = err;
                }
            }
        }),
    });

    // Create-dialog state. Kept at page level so a failed create leaves
    // the entered values intact.
    let show_create = RwSignal::new(false);
    let supplier = RwSignal::new(None::<i64>);
    let material = RwSignal::new(None::<i64>);
    let name = RwSignal::new(String::new());

    let on_open = move |_| {
        supplier.set(None);
        material.set(None);
        name.set(String::new());
        show_create.set(true);
    };

    let on_cancel = Callback::new(move |_| show_create.set(false));

    view! {
        <div class="names-page">
            <header class="names-page__header">
                <h1>"Supplier material names"</h1>
                <button class="btn btn--primary" on:click=on_open>
                    "+ New name"
                </button>
            </header>

            {move || {
                let s = state.get();
                if s.loading && s.names.is_empty() {
                    view! { <p>"Loading catalog..."</p> }.into_any()
                } else if s.names.is_empty() {
                    view! {
                        <p class="names-page__empty">"No supplier material names yet"</p>
                    }
                        .into_any()
                } else {
                    view! {
                        <table class="names-page__table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Name"</th>
                                    <th>"Material"</th>
                                    <th>"Supplier"</th>
                                    <th>"Created"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {s
                                    .names
                                    .iter()
                                    .map(|rec| name_row(rec, catalog))
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}

            <Show when=move || show_create.get()>
                <CreateNameDialog
                    supplier=supplier
                    material=material
                    name=name
                    on_cancel=on_cancel
                    catalog=catalog
                    state=state
                />
            </Show>
        </div>
    }
}

/// One table row with its confirm-guarded delete button.
fn name_row(
    rec: &crate::net::types::SupplierMaterialName,
    catalog: LocalResource<Result<Catalog, String>>,
) -> impl IntoView {
    let id = rec.id;
    let label = rec.name.clone();
    let created = rec.created_at.clone().unwrap_or_default();

    let on_delete = move |_| {
        if !dialog::confirm(&format!("Delete name #{id} \"{label}\"?")) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::delete_supplier_material_name(id).await {
                    Ok(()) => catalog.refetch(),
                    Err(err) => {
                        log::error!("delete of name {id} failed: {err}");
                        dialog::alert(&format!("Delete failed: {err}"));
                    }
                }
            });
        }
    };

    view! {
        <tr class="names-page__row">
            <td>{rec.id}</td>
            <td>{rec.name.clone()}</td>
            <td>{rec.material.name.clone()}</td>
            <td>{rec.supplier.name.clone()}</td>
            <td>{format_date(&created)}</td>
            <td>
                <button class="btn btn--danger" on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Modal dialog for creating a supplier material name.
///
/// Validation runs before any request goes out; a create failure keeps
/// the dialog open with the entered values untouched.
#[component]
fn CreateNameDialog(
    supplier: RwSignal<Option<i64>>,
    material: RwSignal<Option<i64>>,
    name: RwSignal<String>,
    on_cancel: Callback<()>,
    catalog: LocalResource<Result<Catalog, String>>,
    state: RwSignal<CatalogState>,
) -> impl IntoView {
    let supplier_options = move || {
        state.with(|s| {
            s.companies
                .iter()
                .map(|c| (c.id, c.name.clone()))
                .collect::<Vec<_>>()
        })
    };
    let material_options = move || {
        state.with(|s| {
            s.materials
                .iter()
                .map(|m| (m.id, m.name.clone()))
                .collect::<Vec<_>>()
        })
    };

    let submit = Callback::new(move |_| {
        let draft = NameDraft {
            supplier_id: supplier.get(),
            material_id: material.get(),
            name: name.get(),
        };
        if let Some(message) = draft.validate() {
            dialog::alert(message);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = api::create_supplier_material_name(
                    draft.material_id.unwrap_or_default(),
                    draft.supplier_id.unwrap_or_default(),
                    draft.name.trim(),
                )
                .await;
                match result {
                    Ok(()) => {
                        catalog.refetch();
                        supplier.set(None);
                        material.set(None);
                        name.set(String::new());
                        on_cancel.run(());
                    }
                    Err(err) => {
                        log::error!("create name failed: {err}");
                        dialog::alert(&format!("Create failed: {err}"));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &draft;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New supplier material name"</h2>

                {move || {
                    view! {
                        <EntityPicker
                            label="Supplier"
                            placeholder="Select supplier..."
                            options=supplier_options()
                            selected=supplier
                        />
                        <EntityPicker
                            label="Material"
                            placeholder="Select material..."
                            options=material_options()
                            selected=material
                        />
                    }
                }}

                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
