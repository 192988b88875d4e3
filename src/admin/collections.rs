use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::admin::singletons::EditorProps;
use crate::components::field::{lines, optional, TextField};
use crate::components::notification::ToastMessage;
use crate::store::context::use_content;
use crate::store::model::{
    CaseStudy, CaseStudyPatch, NewCaseStudy, NewPartner, NewService, Partner, PartnerPatch,
    Service, ServiceIcon, ServicePatch,
};

#[derive(Properties, PartialEq)]
struct RecordRowProps {
    title: String,
    subtitle: String,
    selected: bool,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
}

#[function_component(RecordRow)]
fn record_row(props: &RecordRowProps) -> Html {
    let on_edit = props.on_edit.reform(|_: MouseEvent| ());
    let on_delete = props.on_delete.reform(|_: MouseEvent| ());
    html! {
        <div class={classes!("record-row", props.selected.then(|| "selected"))}>
            <div class="record-text">
                <strong>{&props.title}</strong>
                <span>{&props.subtitle}</span>
            </div>
            <div class="record-actions">
                <button class="secondary-button" onclick={on_edit}>{"Edit"}</button>
                <button class="delete-button" onclick={on_delete}>{"Delete"}</button>
            </div>
        </div>
    }
}

fn confirm_delete(name: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(&format!("Delete \"{}\"?", name)).ok())
        .unwrap_or(false)
}

/// Form heading and submit label for adding vs editing.
fn form_labels(editing: bool, noun: &str) -> (String, String) {
    if editing {
        (format!("Edit {}", noun), "Save changes".to_string())
    } else {
        (format!("Add {}", noun), format!("Add {}", noun))
    }
}

// Services

#[derive(Clone, PartialEq)]
struct ServiceForm {
    title: String,
    description: String,
    icon: ServiceIcon,
    details: String,
}

impl Default for ServiceForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            icon: ServiceIcon::Code,
            details: String::new(),
        }
    }
}

impl From<&Service> for ServiceForm {
    fn from(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            icon: service.icon,
            details: service.details.clone(),
        }
    }
}

impl ServiceForm {
    fn to_new(&self) -> NewService {
        NewService {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            icon: self.icon,
            details: self.details.trim().to_string(),
        }
    }
}

#[function_component(ServicesEditor)]
pub fn services_editor(props: &EditorProps) -> Html {
    let content = use_content();
    let services = content.read().services().to_vec();
    let form = use_state(ServiceForm::default);
    let editing = use_state(|| None::<String>);

    let set_field = |apply: fn(&mut ServiceForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let on_icon = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(icon) = ServiceIcon::from_name(&select.value()) {
                let mut next = (*form).clone();
                next.icon = icon;
                form.set(next);
            }
        })
    };

    let onsubmit = {
        let content = content.clone();
        let form = form.clone();
        let editing = editing.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let new = form.to_new();
            let missing = new.missing_fields();
            if !missing.is_empty() {
                notify.emit(ToastMessage::error(format!("Required: {}", missing.join(", "))));
                return;
            }
            match (*editing).clone() {
                Some(id) => {
                    if content.update(|store| store.update_service(&id, ServicePatch::from(new))) {
                        notify.emit(ToastMessage::success("Service updated"));
                    } else {
                        notify.emit(ToastMessage::error("That service no longer exists"));
                    }
                }
                None => {
                    content.update(|store| store.add_service(new));
                    notify.emit(ToastMessage::success("Service added"));
                }
            }
            editing.set(None);
            form.set(ServiceForm::default());
        })
    };

    let on_cancel = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            form.set(ServiceForm::default());
        })
    };

    let (heading, submit_label) = form_labels(editing.is_some(), "service");

    html! {
        <div class="collection-editor">
            <div class="record-list">
                {
                    services.iter().map(|service| {
                        let on_edit = {
                            let content = content.clone();
                            let form = form.clone();
                            let editing = editing.clone();
                            let id = service.id.clone();
                            Callback::from(move |_| {
                                let current = content.read().service(&id).map(ServiceForm::from);
                                if let Some(current) = current {
                                    form.set(current);
                                    editing.set(Some(id.clone()));
                                }
                            })
                        };
                        let on_delete = {
                            let content = content.clone();
                            let editing = editing.clone();
                            let notify = props.notify.clone();
                            let id = service.id.clone();
                            let title = service.title.clone();
                            Callback::from(move |_| {
                                if confirm_delete(&title) && content.update(|store| store.remove_service(&id)) {
                                    if editing.as_deref() == Some(id.as_str()) {
                                        editing.set(None);
                                    }
                                    notify.emit(ToastMessage::success("Service deleted"));
                                }
                            })
                        };
                        html! {
                            <RecordRow
                                key={service.id.clone()}
                                title={service.title.clone()}
                                subtitle={service.description.clone()}
                                selected={editing.as_deref() == Some(service.id.as_str())}
                                on_edit={on_edit}
                                on_delete={on_delete}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
            <form class="editor-form" onsubmit={onsubmit}>
                <h2>{heading}</h2>
                <TextField label="Title" required=true value={form.title.clone()}
                    on_change={set_field(|f, v| f.title = v)} />
                <TextField label="Description" multiline=true required=true value={form.description.clone()}
                    on_change={set_field(|f, v| f.description = v)} />
                <label class="form-field">
                    <span class="form-label">{"Icon"}</span>
                    <select onchange={on_icon}>
                        {
                            ServiceIcon::ALL.iter().map(|icon| html! {
                                <option value={icon.as_str()} selected={*icon == form.icon}>
                                    {format!("{} {}", icon.glyph(), icon.as_str())}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </label>
                <TextField label="Details" multiline=true value={form.details.clone()}
                    on_change={set_field(|f, v| f.details = v)} />
                <div class="form-actions">
                    <button type="submit" class="cta-button">{submit_label}</button>
                    if editing.is_some() {
                        <button type="button" class="secondary-button" onclick={on_cancel}>{"Cancel"}</button>
                    }
                </div>
            </form>
        </div>
    }
}

// Partners

#[derive(Clone, Default, PartialEq)]
struct PartnerForm {
    name: String,
    logo: String,
    description: String,
    website: String,
}

impl From<&Partner> for PartnerForm {
    fn from(partner: &Partner) -> Self {
        Self {
            name: partner.name.clone(),
            logo: partner.logo.clone(),
            description: partner.description.clone(),
            website: partner.website.clone().unwrap_or_default(),
        }
    }
}

impl PartnerForm {
    fn to_new(&self) -> NewPartner {
        NewPartner {
            name: self.name.trim().to_string(),
            logo: self.logo.trim().to_string(),
            description: self.description.trim().to_string(),
            website: optional(&self.website),
        }
    }
}

/// Deleting a partner leaves case studies pointing at it untouched.
#[function_component(PartnersEditor)]
pub fn partners_editor(props: &EditorProps) -> Html {
    let content = use_content();
    let partners = content.read().partners().to_vec();
    let form = use_state(PartnerForm::default);
    let editing = use_state(|| None::<String>);

    let set_field = |apply: fn(&mut PartnerForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let content = content.clone();
        let form = form.clone();
        let editing = editing.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let new = form.to_new();
            let missing = new.missing_fields();
            if !missing.is_empty() {
                notify.emit(ToastMessage::error(format!("Required: {}", missing.join(", "))));
                return;
            }
            match (*editing).clone() {
                Some(id) => {
                    if content.update(|store| store.update_partner(&id, PartnerPatch::from(new))) {
                        notify.emit(ToastMessage::success("Partner updated"));
                    } else {
                        notify.emit(ToastMessage::error("That partner no longer exists"));
                    }
                }
                None => {
                    content.update(|store| store.add_partner(new));
                    notify.emit(ToastMessage::success("Partner added"));
                }
            }
            editing.set(None);
            form.set(PartnerForm::default());
        })
    };

    let on_cancel = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            form.set(PartnerForm::default());
        })
    };

    let (heading, submit_label) = form_labels(editing.is_some(), "partner");

    html! {
        <div class="collection-editor">
            <div class="record-list">
                {
                    partners.iter().map(|partner| {
                        let on_edit = {
                            let content = content.clone();
                            let form = form.clone();
                            let editing = editing.clone();
                            let id = partner.id.clone();
                            Callback::from(move |_| {
                                let current = content.read().partner(&id).map(PartnerForm::from);
                                if let Some(current) = current {
                                    form.set(current);
                                    editing.set(Some(id.clone()));
                                }
                            })
                        };
                        let on_delete = {
                            let content = content.clone();
                            let editing = editing.clone();
                            let notify = props.notify.clone();
                            let id = partner.id.clone();
                            let name = partner.name.clone();
                            Callback::from(move |_| {
                                if confirm_delete(&name) && content.update(|store| store.remove_partner(&id)) {
                                    if editing.as_deref() == Some(id.as_str()) {
                                        editing.set(None);
                                    }
                                    notify.emit(ToastMessage::success("Partner deleted"));
                                }
                            })
                        };
                        html! {
                            <RecordRow
                                key={partner.id.clone()}
                                title={partner.name.clone()}
                                subtitle={partner.website.clone().unwrap_or_default()}
                                selected={editing.as_deref() == Some(partner.id.as_str())}
                                on_edit={on_edit}
                                on_delete={on_delete}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
            <form class="editor-form" onsubmit={onsubmit}>
                <h2>{heading}</h2>
                <TextField label="Name" required=true value={form.name.clone()}
                    on_change={set_field(|f, v| f.name = v)} />
                <TextField label="Logo URL" required=true value={form.logo.clone()}
                    on_change={set_field(|f, v| f.logo = v)} />
                <TextField label="Description" multiline=true required=true value={form.description.clone()}
                    on_change={set_field(|f, v| f.description = v)} />
                <TextField label="Website" input_type="url" value={form.website.clone()}
                    on_change={set_field(|f, v| f.website = v)} />
                <div class="form-actions">
                    <button type="submit" class="cta-button">{submit_label}</button>
                    if editing.is_some() {
                        <button type="button" class="secondary-button" onclick={on_cancel}>{"Cancel"}</button>
                    }
                </div>
            </form>
        </div>
    }
}

// Case studies

#[derive(Clone, Default, PartialEq)]
struct CaseStudyForm {
    title: String,
    client: String,
    description: String,
    challenge: String,
    solution: String,
    result: String,
    images: String,
    partner_id: String,
}

impl From<&CaseStudy> for CaseStudyForm {
    fn from(study: &CaseStudy) -> Self {
        Self {
            title: study.title.clone(),
            client: study.client.clone(),
            description: study.description.clone(),
            challenge: study.challenge.clone(),
            solution: study.solution.clone(),
            result: study.result.clone(),
            images: study.images.join("\n"),
            partner_id: study.partner_id.clone().unwrap_or_default(),
        }
    }
}

impl CaseStudyForm {
    fn to_new(&self) -> NewCaseStudy {
        NewCaseStudy {
            title: self.title.trim().to_string(),
            client: self.client.trim().to_string(),
            description: self.description.trim().to_string(),
            challenge: self.challenge.trim().to_string(),
            solution: self.solution.trim().to_string(),
            result: self.result.trim().to_string(),
            images: lines(&self.images),
            partner_id: optional(&self.partner_id),
        }
    }
}

#[function_component(CaseStudiesEditor)]
pub fn case_studies_editor(props: &EditorProps) -> Html {
    let content = use_content();
    let (studies, partners) = {
        let store = content.read();
        (store.case_studies().to_vec(), store.partners().to_vec())
    };
    let form = use_state(CaseStudyForm::default);
    let editing = use_state(|| None::<String>);

    let set_field = |apply: fn(&mut CaseStudyForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let on_partner = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.partner_id = select.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let content = content.clone();
        let form = form.clone();
        let editing = editing.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let new = form.to_new();
            let missing = new.missing_fields();
            if !missing.is_empty() {
                notify.emit(ToastMessage::error(format!("Required: {}", missing.join(", "))));
                return;
            }
            match (*editing).clone() {
                Some(id) => {
                    if content.update(|store| store.update_case_study(&id, CaseStudyPatch::from(new))) {
                        notify.emit(ToastMessage::success("Case study updated"));
                    } else {
                        notify.emit(ToastMessage::error("That case study no longer exists"));
                    }
                }
                None => {
                    content.update(|store| store.add_case_study(new));
                    notify.emit(ToastMessage::success("Case study added"));
                }
            }
            editing.set(None);
            form.set(CaseStudyForm::default());
        })
    };

    let on_cancel = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            form.set(CaseStudyForm::default());
        })
    };

    let (heading, submit_label) = form_labels(editing.is_some(), "case study");
    // A reference to a deleted partner stays selectable so saving keeps it.
    let dangling_partner = optional(&form.partner_id)
        .filter(|id| !partners.iter().any(|p| &p.id == id));

    html! {
        <div class="collection-editor">
            <div class="record-list">
                {
                    studies.iter().map(|study| {
                        let on_edit = {
                            let content = content.clone();
                            let form = form.clone();
                            let editing = editing.clone();
                            let id = study.id.clone();
                            Callback::from(move |_| {
                                let current = content.read().case_study(&id).map(CaseStudyForm::from);
                                if let Some(current) = current {
                                    form.set(current);
                                    editing.set(Some(id.clone()));
                                }
                            })
                        };
                        let on_delete = {
                            let content = content.clone();
                            let editing = editing.clone();
                            let notify = props.notify.clone();
                            let id = study.id.clone();
                            let title = study.title.clone();
                            Callback::from(move |_| {
                                if confirm_delete(&title) && content.update(|store| store.remove_case_study(&id)) {
                                    if editing.as_deref() == Some(id.as_str()) {
                                        editing.set(None);
                                    }
                                    notify.emit(ToastMessage::success("Case study deleted"));
                                }
                            })
                        };
                        html! {
                            <RecordRow
                                key={study.id.clone()}
                                title={study.title.clone()}
                                subtitle={study.client.clone()}
                                selected={editing.as_deref() == Some(study.id.as_str())}
                                on_edit={on_edit}
                                on_delete={on_delete}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
            <form class="editor-form" onsubmit={onsubmit}>
                <h2>{heading}</h2>
                <TextField label="Title" required=true value={form.title.clone()}
                    on_change={set_field(|f, v| f.title = v)} />
                <TextField label="Client" required=true value={form.client.clone()}
                    on_change={set_field(|f, v| f.client = v)} />
                <TextField label="Description" multiline=true required=true value={form.description.clone()}
                    on_change={set_field(|f, v| f.description = v)} />
                <TextField label="Challenge" multiline=true value={form.challenge.clone()}
                    on_change={set_field(|f, v| f.challenge = v)} />
                <TextField label="Solution" multiline=true value={form.solution.clone()}
                    on_change={set_field(|f, v| f.solution = v)} />
                <TextField label="Result" multiline=true value={form.result.clone()}
                    on_change={set_field(|f, v| f.result = v)} />
                <TextField label="Images (one URL per line)" multiline=true value={form.images.clone()}
                    on_change={set_field(|f, v| f.images = v)} />
                <label class="form-field">
                    <span class="form-label">{"Partner"}</span>
                    <select onchange={on_partner}>
                        <option value="" selected={form.partner_id.is_empty()}>{"No partner"}</option>
                        {
                            partners.iter().map(|partner| html! {
                                <option value={partner.id.clone()} selected={partner.id == form.partner_id}>
                                    {&partner.name}
                                </option>
                            }).collect::<Html>()
                        }
                        if let Some(id) = dangling_partner {
                            <option value={id.clone()} selected=true>{format!("Removed partner ({})", id)}</option>
                        }
                    </select>
                </label>
                <div class="form-actions">
                    <button type="submit" class="cta-button">{submit_label}</button>
                    if editing.is_some() {
                        <button type="button" class="secondary-button" onclick={on_cancel}>{"Cancel"}</button>
                    }
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_partner_selection_means_no_partner() {
        let form = CaseStudyForm {
            title: "t".into(),
            client: "c".into(),
            description: "d".into(),
            images: "/a.jpg\n\n/b.jpg".into(),
            ..Default::default()
        };
        let new = form.to_new();
        assert_eq!(new.partner_id, None);
        assert_eq!(new.images, vec!["/a.jpg".to_string(), "/b.jpg".to_string()]);
        assert!(new.missing_fields().is_empty());
    }

    #[test]
    fn partner_form_round_trips_optional_website() {
        let partner = Partner {
            id: "9".into(),
            name: "Acme".into(),
            logo: "/acme.svg".into(),
            description: "Tools".into(),
            website: None,
        };
        let new = PartnerForm::from(&partner).to_new();
        assert_eq!(new.website, None);
        assert_eq!(new.into_partner("9".into()), partner);
    }

    #[test]
    fn labels_switch_between_add_and_edit() {
        assert_eq!(form_labels(false, "service").1, "Add service");
        assert_eq!(form_labels(true, "service").0, "Edit service");
    }
}
