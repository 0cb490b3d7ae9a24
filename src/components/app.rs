use super::{
    context_menu::ContextMenu,
    event_log::{EventLog, LogEntry, push_entry},
    settings_panel::SettingsPanel,
};
use crate::config::ShimConfig;
use crate::shim::GestureShim;
use crate::util::clog;
use yew::prelude::*;

const ITEMS: [&str; 6] = [
    "analysis.ipynb",
    "data.csv",
    "README.md",
    "plots/",
    "model.py",
    "notes.txt",
];

#[derive(Clone, PartialEq)]
struct OpenMenu {
    item: &'static str,
    x: i32,
    y: i32,
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(ShimConfig::load);
    let menu = use_state(|| None::<OpenMenu>);
    let log = use_state(Vec::<LogEntry>::new);

    // Install the shim for the page lifetime; reinstall when settings change
    {
        let cfg = (*config).clone();
        use_effect_with(cfg, move |cfg| {
            let shim = match GestureShim::install_on_window(cfg) {
                Ok(s) => Some(s),
                Err(err) => {
                    clog(&format!("long-press shim not installed: {:?}", err));
                    None
                }
            };
            move || {
                if let Some(s) = shim {
                    if s.is_holding() {
                        clog("dropping pending hold on teardown");
                    }
                    s.uninstall();
                }
            }
        });
    }

    let on_config = {
        let config = config.clone();
        Callback::from(move |cfg: ShimConfig| {
            cfg.save();
            config.set(cfg);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(None))
    };
    let on_action = {
        let menu = menu.clone();
        Callback::from(move |action: &'static str| {
            if let Some(m) = &*menu {
                clog(&format!("{} -> {}", m.item, action));
            }
        })
    };

    let rows = ITEMS.iter().map(|&item| {
        let oncontextmenu = {
            let menu = menu.clone();
            let log = log.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                let (x, y) = (e.client_x(), e.client_y());
                log.set(push_entry(
                    &log,
                    LogEntry {
                        item: item.to_string(),
                        x,
                        y,
                        synthetic: !e.is_trusted(),
                    },
                ));
                menu.set(Some(OpenMenu { item, x, y }));
            })
        };
        html! { <div {oncontextmenu} style="padding:12px 10px; border-bottom:1px solid #30363d; user-select:none; -webkit-user-select:none; -webkit-touch-callout:none;">{ item }</div> }
    });

    html! {
        <div id="root" style="display:flex; flex-direction:column; gap:12px; padding:12px; max-width:480px;">
            <h2 style="margin:0;">{"Long-press demo"}</h2>
            <div style="border:1px solid #30363d; border-radius:8px;">{ for rows }</div>
            <SettingsPanel config={(*config).clone()} on_change={on_config} />
            <EventLog entries={(*log).clone()} />
            {
                match &*menu {
                    Some(m) => html! { <ContextMenu
                        x={m.x}
                        y={m.y}
                        title={m.item.to_string()}
                        on_action={on_action}
                        on_close={close_menu}
                    /> },
                    None => html! {},
                }
            }
        </div>
    }
}
