use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub multiline: bool,
    #[prop_or_default]
    pub required: bool,
    #[prop_or(AttrValue::Static(""))]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
}

/// Labelled input or textarea reporting every keystroke.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let label = if props.required {
        format!("{} *", &*props.label)
    } else {
        (*props.label).to_string()
    };

    let input = if props.multiline {
        let on_change = props.on_change.clone();
        html! {
            <textarea
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    on_change.emit(input.value());
                })}
            />
        }
    } else {
        let on_change = props.on_change.clone();
        html! {
            <input
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit(input.value());
                })}
            />
        }
    };

    html! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            {input}
        </label>
    }
}

/// Split a textarea into its non-empty trimmed lines.
pub fn lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Empty after trimming becomes `None`.
pub fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_drop_blank_entries() {
        assert_eq!(lines(" a \n\n b\n  \n"), vec!["a".to_string(), "b".to_string()]);
        assert!(lines("").is_empty());
    }

    #[test]
    fn optional_treats_whitespace_as_missing() {
        assert_eq!(optional("   "), None);
        assert_eq!(optional(" https://x.io "), Some("https://x.io".to_string()));
    }
}
