use yew::prelude::*;

use shared::{ChildRecord, ParentProfile};

use super::child_selector_menu::ChildSelectorMenu;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub profile: ParentProfile,
    pub selected: Option<ChildRecord>,
    pub on_select: Callback<ChildRecord>,
    pub on_change_password: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_change_password = props.on_change_password.reform(|_: MouseEvent| ());
    let on_logout = props.on_logout.reform(|_: MouseEvent| ());

    html! {
        <header class="header">
            <div class="container">
                <h1>
                    {if let Some(child) = &props.selected {
                        // First name only keeps the title short.
                        let first_name = child.name.split_whitespace()
                            .next()
                            .unwrap_or(&child.name);
                        format!("{}'s School Life", first_name)
                    } else {
                        "EduSync Parent Portal".to_string()
                    }}
                </h1>
                <div class="header-right">
                    <span class="parent-name">{&props.profile.name}</span>
                    <ChildSelectorMenu
                        dependents={props.profile.children.clone()}
                        selected={props.selected.clone()}
                        on_select={props.on_select.clone()}
                    />
                    <button class="btn btn-secondary" onclick={on_change_password}>
                        {"Change password"}
                    </button>
                    <button class="btn btn-secondary" onclick={on_logout}>
                        {"Sign out"}
                    </button>
                </div>
            </div>
        </header>
    }
}
