use yew::prelude::*;

use crate::components::field::{lines, TextField};
use crate::components::notification::ToastMessage;
use crate::store::context::use_content;
use crate::store::model::{missing_required, AboutInfo, AboutPatch, FooterInfo, FooterPatch, SocialLink};

#[derive(Properties, PartialEq)]
pub struct EditorProps {
    pub notify: Callback<ToastMessage>,
}

/// One `Platform | https://url` pair per line.
pub fn parse_social_links(text: &str) -> Vec<SocialLink> {
    lines(text)
        .into_iter()
        .filter_map(|line| {
            let (platform, url) = line.split_once('|')?;
            let (platform, url) = (platform.trim(), url.trim());
            (!platform.is_empty() && !url.is_empty()).then(|| SocialLink {
                platform: platform.to_string(),
                url: url.to_string(),
            })
        })
        .collect()
}

pub fn format_social_links(links: &[SocialLink]) -> String {
    links
        .iter()
        .map(|link| format!("{} | {}", link.platform, link.url))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Clone, PartialEq)]
struct FooterForm {
    address: String,
    email: String,
    phone: String,
    social_links: String,
}

impl From<&FooterInfo> for FooterForm {
    fn from(footer: &FooterInfo) -> Self {
        Self {
            address: footer.address.clone(),
            email: footer.email.clone(),
            phone: footer.phone.clone(),
            social_links: format_social_links(&footer.social_links),
        }
    }
}

#[function_component(FooterEditor)]
pub fn footer_editor(props: &EditorProps) -> Html {
    let content = use_content();
    let current = content.read().footer().clone();
    let form = use_state(|| FooterForm::from(&current));

    // Pick up changes made elsewhere, e.g. restoring defaults.
    {
        let form = form.clone();
        use_effect_with_deps(
            move |footer| {
                form.set(FooterForm::from(footer));
                || ()
            },
            current,
        );
    }

    let set_field = |apply: fn(&mut FooterForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let missing = missing_required(&[
                ("Address", form.address.as_str()),
                ("Email", form.email.as_str()),
                ("Phone", form.phone.as_str()),
            ]);
            if !missing.is_empty() {
                notify.emit(ToastMessage::error(format!("Required: {}", missing.join(", "))));
                return;
            }
            content.update(|store| {
                store.update_footer(FooterPatch {
                    address: Some(form.address.trim().to_string()),
                    email: Some(form.email.trim().to_string()),
                    phone: Some(form.phone.trim().to_string()),
                    social_links: Some(parse_social_links(&form.social_links)),
                })
            });
            notify.emit(ToastMessage::success("Contact details saved"));
        })
    };

    html! {
        <form class="editor-form" onsubmit={onsubmit}>
            <TextField label="Address" required=true value={form.address.clone()}
                on_change={set_field(|f, v| f.address = v)} />
            <TextField label="Email" input_type="email" required=true value={form.email.clone()}
                on_change={set_field(|f, v| f.email = v)} />
            <TextField label="Phone" required=true value={form.phone.clone()}
                on_change={set_field(|f, v| f.phone = v)} />
            <TextField label="Social links" multiline=true placeholder="LinkedIn | https://linkedin.com/company/..."
                value={form.social_links.clone()} on_change={set_field(|f, v| f.social_links = v)} />
            <button type="submit" class="cta-button">{"Save"}</button>
        </form>
    }
}

#[derive(Clone, PartialEq)]
struct AboutForm {
    title: String,
    description: String,
    mission: String,
    vision: String,
    values: String,
}

impl From<&AboutInfo> for AboutForm {
    fn from(about: &AboutInfo) -> Self {
        Self {
            title: about.title.clone(),
            description: about.description.clone(),
            mission: about.mission.clone(),
            vision: about.vision.clone(),
            values: about.values.join("\n"),
        }
    }
}

impl AboutForm {
    fn to_patch(&self) -> AboutPatch {
        AboutPatch {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            mission: Some(self.mission.trim().to_string()),
            vision: Some(self.vision.trim().to_string()),
            values: Some(lines(&self.values)),
            team: None,
        }
    }
}

/// Team members are seeded content and are not edited here.
#[function_component(AboutEditor)]
pub fn about_editor(props: &EditorProps) -> Html {
    let content = use_content();
    let current = content.read().about().clone();
    let form = use_state(|| AboutForm::from(&current));

    {
        let form = form.clone();
        use_effect_with_deps(
            move |about| {
                form.set(AboutForm::from(about));
                || ()
            },
            current,
        );
    }

    let set_field = |apply: fn(&mut AboutForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let missing = missing_required(&[
                ("Title", form.title.as_str()),
                ("Description", form.description.as_str()),
            ]);
            if !missing.is_empty() {
                notify.emit(ToastMessage::error(format!("Required: {}", missing.join(", "))));
                return;
            }
            content.update(|store| store.update_about(form.to_patch()));
            notify.emit(ToastMessage::success("About page saved"));
        })
    };

    html! {
        <form class="editor-form" onsubmit={onsubmit}>
            <TextField label="Title" required=true value={form.title.clone()}
                on_change={set_field(|f, v| f.title = v)} />
            <TextField label="Description" multiline=true required=true value={form.description.clone()}
                on_change={set_field(|f, v| f.description = v)} />
            <TextField label="Mission" multiline=true value={form.mission.clone()}
                on_change={set_field(|f, v| f.mission = v)} />
            <TextField label="Vision" multiline=true value={form.vision.clone()}
                on_change={set_field(|f, v| f.vision = v)} />
            <TextField label="Values (one per line)" multiline=true value={form.values.clone()}
                on_change={set_field(|f, v| f.values = v)} />
            <button type="submit" class="cta-button">{"Save"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_links_round_trip_through_text() {
        let links = vec![
            SocialLink { platform: "LinkedIn".into(), url: "https://linkedin.com/x".into() },
            SocialLink { platform: "GitHub".into(), url: "https://github.com/x".into() },
        ];
        assert_eq!(parse_social_links(&format_social_links(&links)), links);
    }

    #[test]
    fn malformed_social_lines_are_skipped() {
        let parsed = parse_social_links("no separator\n | https://x.io\nX|https://x.com\n");
        assert_eq!(parsed, vec![SocialLink { platform: "X".into(), url: "https://x.com".into() }]);
    }

    #[test]
    fn about_form_saves_trimmed_text() {
        let form = AboutForm {
            title: "  About us ".into(),
            description: "\nWho we are\n".into(),
            mission: " Ship it ".into(),
            vision: "".into(),
            values: " Honesty \n\n Craft\n".into(),
        };
        let patch = form.to_patch();
        assert_eq!(patch.title.as_deref(), Some("About us"));
        assert_eq!(patch.description.as_deref(), Some("Who we are"));
        assert_eq!(patch.mission.as_deref(), Some("Ship it"));
        assert_eq!(patch.vision.as_deref(), Some(""));
        assert_eq!(patch.values, Some(vec!["Honesty".to_string(), "Craft".to_string()]));
        assert!(patch.team.is_none());
    }
}
