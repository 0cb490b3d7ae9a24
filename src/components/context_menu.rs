use yew::prelude::*;

pub const ACTIONS: [&str; 4] = ["Open", "Rename", "Duplicate", "Delete"];

#[derive(Properties, PartialEq, Clone)]
pub struct ContextMenuProps {
    pub x: i32,
    pub y: i32,
    pub title: String,
    pub on_action: Callback<&'static str>,
    pub on_close: Callback<()>,
}

#[function_component(ContextMenu)]
pub fn context_menu(props: &ContextMenuProps) -> Html {
    let backdrop_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let buttons = ACTIONS.iter().map(|&action| {
        let on_action = props.on_action.clone();
        let on_close = props.on_close.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_action.emit(action);
            on_close.emit(());
        });
        html! { <button {onclick} style="text-align:left; padding:6px 10px; background:none; border:none; color:inherit;">{ action }</button> }
    });
    html! {<div onclick={backdrop_cb} style="position:fixed; inset:0; z-index:40;">
        <div style={format!("position:fixed; left:{}px; top:{}px; background:#161b22; border:1px solid #30363d; border-radius:8px; padding:4px 0; min-width:160px; display:flex; flex-direction:column;", props.x, props.y)}>
            <div style="font-size:11px; opacity:0.7; padding:4px 10px;">{ props.title.clone() }</div>
            { for buttons }
        </div>
    </div>}
}
