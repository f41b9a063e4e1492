use thiserror::Error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error("Invalid threshold value.")]
    NotANumber,
}

/// Parse the raw threshold input as a floating-point number. Unlike JS
/// `parseFloat` this also accepts `inf`/`nan` literals; those are rare enough
/// in a numeric input that the difference is accepted.
pub fn parse_threshold(raw: &str) -> Result<f64, ThresholdError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ThresholdError::NotANumber)
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Receives the raw input text; the dashboard owns parsing and the banner.
    pub on_save: Callback<String>,
}

#[function_component(ThresholdControl)]
pub fn threshold_control(props: &Props) -> Html {
    let input_ref = use_node_ref();

    let on_click = {
        let input_ref = input_ref.clone();
        let on_save = props.on_save.clone();

        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                on_save.emit(input.value());
            }
        })
    };

    html! {
        <div class="flex items-center gap-2 mt-4">
            <label class="text-sm" for="threshold">{"Alert threshold:"}</label>
            <input
                id="threshold"
                type="number"
                class="input input-sm input-bordered w-32"
                placeholder="e.g. 150"
                ref={input_ref}
            />
            <button class="btn btn-sm btn-primary" onclick={on_click}>
                {"Save Threshold"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_threshold_is_accepted() {
        assert_eq!(parse_threshold("3.5"), Ok(3.5));
        assert_eq!(parse_threshold("150"), Ok(150.0));
        assert_eq!(parse_threshold(" -0.25 "), Ok(-0.25));
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        assert_eq!(parse_threshold("abc"), Err(ThresholdError::NotANumber));
        assert_eq!(parse_threshold(""), Err(ThresholdError::NotANumber));
        assert_eq!(parse_threshold("3.5.5"), Err(ThresholdError::NotANumber));
    }

    #[test]
    fn test_rejection_message_matches_banner_text() {
        assert_eq!(
            ThresholdError::NotANumber.to_string(),
            "Invalid threshold value."
        );
    }
}
