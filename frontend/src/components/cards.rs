use yew::prelude::*;

use crate::components::icons::IconSvg;
use crate::content::{FeatureEntry, OnboardingStep};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: &'static FeatureEntry,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = props.feature;
    html! {
        <div class="feature-card">
            <div class="feature-icon">
                <IconSvg icon={feature.icon} class={classes!("icon-md")} />
            </div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepItemProps {
    pub step: &'static OnboardingStep,
    pub index: usize,
    pub total: usize,
}

/// Connector line runs from every badge except the last one.
pub fn has_connector(index: usize, total: usize) -> bool {
    index + 1 < total
}

#[function_component(StepItem)]
pub fn step_item(props: &StepItemProps) -> Html {
    let step = props.step;
    html! {
        <div class="step-item">
            <div class="step-marker">
                <div class="step-number">{props.index + 1}</div>
                {
                    if has_connector(props.index, props.total) {
                        html! { <div class="step-connector"></div> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="step-body">
                <div class="step-heading">
                    <span class="step-icon"><IconSvg icon={step.icon} class={classes!("icon-md")} /></span>
                    <h3>{step.title}</h3>
                </div>
                <p>{step.description}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_skips_last_step() {
        assert!(has_connector(0, 3));
        assert!(has_connector(1, 3));
        assert!(!has_connector(2, 3));
        assert!(!has_connector(0, 1));
    }
}
