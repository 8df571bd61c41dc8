use dioxus::prelude::*;

use crate::app::AuthServices;
use crate::components::display::{LoadingIndicator, NoticeBanner};
use crate::components::input::FieldError;
use crate::features::location::{LocationCascade, LocationLevel, LocationOption};
use crate::services::events::AuthEvent;
use crate::utils::select_class;

#[derive(Props, PartialEq, Clone)]
pub struct LocationSelectProps {
    pub id: String,
    pub label: String,
    pub placeholder: String,
    pub options: Vec<LocationOption>,
    #[props(!optional)]
    pub selected: Option<String>,
    pub disabled: bool,
    pub loading: bool,
    #[props(!optional)]
    pub error: Option<String>,
    pub on_change: EventHandler<String>,
}

/// One level of the country/state/city cascade
#[component]
pub fn LocationSelect(props: LocationSelectProps) -> Element {
    let selected = props.selected.unwrap_or_default();
    let on_change = props.on_change;

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            select {
                id: "{props.id}",
                name: "{props.id}",
                class: select_class(props.error.is_some(), props.disabled),
                value: "{selected}",
                disabled: props.disabled,
                onchange: move |evt| {
                    on_change.call(evt.value());
                },
                option { value: "", "{props.placeholder}" }
                for choice in props.options {
                    option {
                        key: "{choice.key()}",
                        value: "{choice.key()}",
                        selected: choice.key() == selected,
                        "{choice.name}"
                    }
                }
            }
            if props.loading {
                LoadingIndicator { message: "Loading...".to_string(), inline: true }
            }
            FieldError { message: props.error.clone() }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct LocationSelectorProps {
    pub cascade: Signal<LocationCascade>,
    #[props(!optional)]
    pub country_error: Option<String>,
    #[props(!optional)]
    pub state_error: Option<String>,
    #[props(!optional)]
    pub city_error: Option<String>,
}

/// Country → state → city selectors driving the location provider
#[component]
pub fn LocationSelector(props: LocationSelectorProps) -> Element {
    let services = use_context::<AuthServices>();
    let mut cascade = props.cascade;

    let locations = services.locations.clone();
    let events = services.events.clone();
    use_hook(move || {
        spawn(async move {
            let fetch = cascade.write().begin_countries_load();
            let list = locations.load_countries().await;
            if !cascade.write().apply_countries(&fetch, list) {
                events.handle_event(AuthEvent::StaleLocationResponseDiscarded {
                    level: LocationLevel::Country,
                });
            }
        })
    });

    let on_country = {
        let locations = services.locations.clone();
        let events = services.events.clone();
        move |code: String| {
            let Some(fetch) = cascade.write().select_country(&code) else {
                return;
            };
            let locations = locations.clone();
            let events = events.clone();
            spawn(async move {
                let states = locations.fetch_states(fetch.country_code()).await;
                if !cascade.write().apply_states(&fetch, states) {
                    events.handle_event(AuthEvent::StaleLocationResponseDiscarded {
                        level: LocationLevel::State,
                    });
                }
            });
        }
    };

    let on_state = {
        let locations = services.locations.clone();
        let events = services.events.clone();
        move |code: String| {
            let Some(fetch) = cascade.write().select_state(&code) else {
                return;
            };
            let locations = locations.clone();
            let events = events.clone();
            spawn(async move {
                let cities = locations
                    .fetch_cities(fetch.country_code(), fetch.state_code())
                    .await;
                if !cascade.write().apply_cities(&fetch, cities) {
                    events.handle_event(AuthEvent::StaleLocationResponseDiscarded {
                        level: LocationLevel::City,
                    });
                }
            });
        }
    };

    let current = cascade.read().clone();
    let key_of = |option: &Option<LocationOption>| option.as_ref().map(|o| o.key().to_string());

    rsx! {
        div {
            class: "location-selector",
            NoticeBanner { notice: current.country_notice.clone() }
            LocationSelect {
                id: "country".to_string(),
                label: "Country".to_string(),
                placeholder: "Select Country".to_string(),
                options: current.countries.clone(),
                selected: key_of(&current.selection.country),
                disabled: current.loading.countries,
                loading: current.loading.countries,
                error: props.country_error.clone(),
                on_change: on_country,
            }
            LocationSelect {
                id: "state".to_string(),
                label: "State".to_string(),
                placeholder: "Select State".to_string(),
                options: current.states.clone(),
                selected: key_of(&current.selection.state),
                disabled: current.state_selector_disabled(),
                loading: current.loading.states,
                error: props.state_error.clone(),
                on_change: on_state,
            }
            LocationSelect {
                id: "city".to_string(),
                label: "City".to_string(),
                placeholder: "Select City".to_string(),
                options: current.cities.clone(),
                selected: key_of(&current.selection.city),
                disabled: current.city_selector_disabled(),
                loading: current.loading.cities,
                error: props.city_error.clone(),
                on_change: move |name: String| cascade.write().select_city(&name),
            }
            NoticeBanner { notice: current.subdivision_notice.clone() }
        }
    }
}
