//! Company create/edit form with nested contact-person lists.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::company_form::{CompanyDraft, CompanyKind, ContactKind};

/// Company form page.
///
/// Owns a single [`CompanyDraft`] signal seeded from the default template
/// (one contact person with one contact). Submission hands the draft to a
/// caller-supplied `on_save` callback when one is provided; otherwise it
/// falls back to the logging placeholder in `net::api`. Either way the
/// page navigates home afterwards. Required markers in labels are
/// presentational only; nothing blocks submission.
#[component]
pub fn CompanyFormPage(#[prop(optional)] on_save: Option<Callback<CompanyDraft>>) -> impl IntoView {
    let draft = RwSignal::new(CompanyDraft::default());
    let navigate = use_navigate();

    let submit = move |_| {
        let current = draft.get_untracked();
        if let Some(save) = on_save {
            save.run(current);
        } else {
            #[cfg(feature = "hydrate")]
            {
                leptos::task::spawn_local(async move {
                    if let Err(err) = crate::net::api::save_company(&current).await {
                        log::error!("company save placeholder failed: {err}");
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = current;
            }
        }
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="company-form">
            <h1>"New company"</h1>

            <section class="company-form__section">
                <h2>"Company"</h2>
                {text_field(draft, "Name *", |d| &d.name, |d, v| d.name = v)}
                {text_field(draft, "Legal name *", |d| &d.legal_name, |d, v| d.legal_name = v)}
                {text_field(draft, "Tax number *", |d| &d.tax_number, |d, v| d.tax_number = v)}
                {text_field(
                    draft,
                    "Registration number",
                    |d| &d.registration_number,
                    |d, v| d.registration_number = v,
                )}
                {text_field(draft, "Address *", |d| &d.address, |d, v| d.address = v)}
                {text_field(draft, "Director", |d| &d.director, |d, v| d.director = v)}
                {text_field(draft, "Email", |d| &d.email, |d, v| d.email = v)}

                <label class="company-form__label">
                    "Company type *"
                    <select
                        class="company-form__input"
                        prop:value=move || draft.with(|d| d.kind.as_str().to_owned())
                        on:change=move |ev| {
                            let kind = CompanyKind::from_value(&event_target_value(&ev));
                            draft.update(|d| d.kind = kind);
                        }
                    >
                        {CompanyKind::ALL
                            .into_iter()
                            .map(|kind| {
                                view! { <option value=kind.as_str()>{kind.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </section>

            <section class="company-form__section">
                <h2>"Bank details"</h2>
                {text_field(draft, "Bank name", |d| &d.bank_name, |d, v| d.bank_name = v)}
                {text_field(draft, "Account number", |d| &d.bank_account, |d, v| d.bank_account = v)}
                {text_field(draft, "Bank code", |d| &d.bank_code, |d, v| d.bank_code = v)}
            </section>

            <section class="company-form__section">
                <div class="company-form__section-header">
                    <h2>"Contact persons"</h2>
                    <button class="btn" on:click=move |_| draft.update(CompanyDraft::add_person)>
                        "+ Add person"
                    </button>
                </div>

                {move || {
                    let count = draft.with(|d| d.contact_persons.len());
                    (0..count).map(|i| person_card(draft, i)).collect::<Vec<_>>()
                }}
            </section>

            <div class="company-form__actions">
                <button class="btn btn--primary" on:click=submit>
                    "Save"
                </button>
            </div>
        </div>
    }
}

/// Labelled text input bound to one draft field through a getter/setter
/// pair, so the markup stays identical across all flat fields.
fn text_field(
    draft: RwSignal<CompanyDraft>,
    label: &'static str,
    get: fn(&CompanyDraft) -> &String,
    set: fn(&mut CompanyDraft, String),
) -> impl IntoView {
    view! {
        <label class="company-form__label">
            {label}
            <input
                class="company-form__input"
                type="text"
                prop:value=move || draft.with(|d| get(d).clone())
                on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
            />
        </label>
    }
}

/// Card for contact person `index`: name/position fields, the person's
/// own contact rows, and the remove buttons. All row operations address
/// the draft by index.
fn person_card(draft: RwSignal<CompanyDraft>, index: usize) -> impl IntoView {
    let first_name = move || {
        draft.with(|d| {
            d.contact_persons
                .get(index)
                .map_or_else(String::new, |p| p.first_name.clone())
        })
    };
    let last_name = move || {
        draft.with(|d| {
            d.contact_persons
                .get(index)
                .map_or_else(String::new, |p| p.last_name.clone())
        })
    };
    let position = move || {
        draft.with(|d| {
            d.contact_persons
                .get(index)
                .map_or_else(String::new, |p| p.position.clone())
        })
    };

    view! {
        <div class="company-form__person">
            <div class="company-form__person-header">
                <h3>{format!("Person {}", index + 1)}</h3>
                <button class="btn btn--danger" on:click=move |_| draft.update(|d| d.remove_person(index))>
                    "Remove"
                </button>
            </div>

            <label class="company-form__label">
                "First name *"
                <input
                    class="company-form__input"
                    type="text"
                    prop:value=first_name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| {
                            if let Some(p) = d.contact_persons.get_mut(index) {
                                p.first_name = value;
                            }
                        });
                    }
                />
            </label>
            <label class="company-form__label">
                "Last name *"
                <input
                    class="company-form__input"
                    type="text"
                    prop:value=last_name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| {
                            if let Some(p) = d.contact_persons.get_mut(index) {
                                p.last_name = value;
                            }
                        });
                    }
                />
            </label>
            <label class="company-form__label">
                "Position"
                <input
                    class="company-form__input"
                    type="text"
                    prop:value=position
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| {
                            if let Some(p) = d.contact_persons.get_mut(index) {
                                p.position = value;
                            }
                        });
                    }
                />
            </label>

            <div class="company-form__contacts">
                {move || {
                    let count = draft
                        .with(|d| d.contact_persons.get(index).map_or(0, |p| p.contacts.len()));
                    (0..count).map(|j| contact_row(draft, index, j)).collect::<Vec<_>>()
                }}
                <button class="btn" on:click=move |_| draft.update(|d| d.add_contact(index))>
                    "+ Add contact"
                </button>
            </div>
        </div>
    }
}

/// One contact row (kind select + value input) for person `person`.
fn contact_row(draft: RwSignal<CompanyDraft>, person: usize, contact: usize) -> impl IntoView {
    let kind = move || {
        draft.with(|d| {
            d.contact_persons
                .get(person)
                .and_then(|p| p.contacts.get(contact))
                .map_or(ContactKind::default(), |c| c.kind)
        })
    };
    let value = move || {
        draft.with(|d| {
            d.contact_persons
                .get(person)
                .and_then(|p| p.contacts.get(contact))
                .map_or_else(String::new, |c| c.value.clone())
        })
    };

    view! {
        <div class="company-form__contact-row">
            <select
                class="company-form__input company-form__contact-kind"
                prop:value=move || kind().as_str().to_owned()
                on:change=move |ev| {
                    let next = ContactKind::from_value(&event_target_value(&ev));
                    draft.update(|d| {
                        if let Some(c) = d
                            .contact_persons
                            .get_mut(person)
                            .and_then(|p| p.contacts.get_mut(contact))
                        {
                            c.kind = next;
                        }
                    });
                }
            >
                {ContactKind::ALL
                    .into_iter()
                    .map(|k| view! { <option value=k.as_str()>{k.as_str()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <input
                class="company-form__input"
                type="text"
                placeholder="Value"
                prop:value=value
                on:input=move |ev| {
                    let next = event_target_value(&ev);
                    draft.update(|d| {
                        if let Some(c) = d
                            .contact_persons
                            .get_mut(person)
                            .and_then(|p| p.contacts.get_mut(contact))
                        {
                            c.value = next;
                        }
                    });
                }
            />
            <button
                class="btn btn--danger"
                on:click=move |_| draft.update(|d| d.remove_contact(person, contact))
            >
                "\u{00D7}"
            </button>
        </div>
    }
}
