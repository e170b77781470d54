use web_sys::MouseEvent;
use yew::prelude::*;

use shared::ChildRecord;

#[derive(Properties, PartialEq)]
pub struct ChildSelectorMenuProps {
    pub dependents: Vec<ChildRecord>,
    pub selected: Option<ChildRecord>,
    pub on_select: Callback<ChildRecord>,
}

/// Dropdown for picking the dependent every detail view is keyed by.
/// Exactly one child is selected at a time.
#[function_component(ChildSelectorMenu)]
pub fn child_selector_menu(props: &ChildSelectorMenuProps) -> Html {
    let is_open = use_state(|| false);

    let toggle_menu = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_open.set(!*is_open);
        })
    };

    let on_backdrop_click = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            is_open.set(false);
        })
    };

    let on_menu_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let display_letter = props
        .selected
        .as_ref()
        .map(|child| {
            child
                .name
                .chars()
                .next()
                .unwrap_or('?')
                .to_uppercase()
                .to_string()
        })
        .unwrap_or_else(|| "?".to_string());

    html! {
        <div class="child-selector-menu">
            <button
                class="child-selector-button"
                onclick={toggle_menu}
                aria-label="Select child"
            >
                <span class="child-selector-letter">{display_letter}</span>
                <span class="child-selector-name">
                    {props.selected.as_ref().map(|child| child.name.clone())
                        .unwrap_or_else(|| "Select a child".to_string())}
                </span>
            </button>

            if *is_open {
                <>
                    <div class="child-selector-backdrop" onclick={on_backdrop_click}></div>
                    <div class="child-selector-dropdown" onclick={on_menu_click}>
                        {
                            if props.dependents.is_empty() {
                                html! {
                                    <div class="child-selector-item no-children">
                                        <span>{"No children on this account"}</span>
                                    </div>
                                }
                            } else {
                                props.dependents.iter().map(|child| {
                                    let is_active = props.selected.as_ref()
                                        .map(|selected| selected.id == child.id)
                                        .unwrap_or(false);

                                    let on_click = {
                                        let on_select = props.on_select.clone();
                                        let is_open = is_open.clone();
                                        let child = child.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            on_select.emit(child.clone());
                                            is_open.set(false);
                                        })
                                    };

                                    let child_letter = child.name.chars().next()
                                        .unwrap_or('?').to_uppercase().to_string();

                                    html! {
                                        <div
                                            class={classes!("child-selector-item", is_active.then(|| "active"))}
                                            onclick={on_click}
                                        >
                                            <div class="child-avatar">{child_letter}</div>
                                            <div class="child-details">
                                                <span class="child-name">{&child.name}</span>
                                                {if !child.course.is_empty() {
                                                    html! { <span class="child-course">{&child.course}</span> }
                                                } else { html! {} }}
                                            </div>
                                            {if is_active {
                                                html! { <span class="child-active-indicator">{"✓"}</span> }
                                            } else {
                                                html! {}
                                            }}
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        }
                    </div>
                </>
            }
        </div>
    }
}
