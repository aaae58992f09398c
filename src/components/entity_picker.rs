//! Select-based picker over `(id, name)` reference entities.

use leptos::prelude::*;

/// Labelled `<select>` over a list of `(id, name)` options with an empty
/// placeholder row. Writes the picked id (or `None` for the placeholder)
/// back to `selected`.
#[component]
pub fn EntityPicker(
    label: &'static str,
    placeholder: &'static str,
    options: Vec<(i64, String)>,
    selected: RwSignal<Option<i64>>,
) -> impl IntoView {
    let current = move || selected.get().map_or(String::new(), |id| id.to_string());

    view! {
        <label class="dialog__label">
            {label}
            <select
                class="dialog__input"
                prop:value=current
                on:change=move |ev| {
                    selected.set(event_target_value(&ev).parse::<i64>().ok());
                }
            >
                <option value="">{placeholder}</option>
                {options
                    .into_iter()
                    .map(|(id, name)| {
                        view! { <option value=id.to_string()>{name}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
