use crate::config::ShimConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub config: ShimConfig,
    pub on_change: Callback<ShimConfig>,
}

fn adjust(cfg: &ShimConfig, hold_delta: i64, drift_delta: f64) -> ShimConfig {
    ShimConfig {
        hold_ms: (cfg.hold_ms as i64 + hold_delta).clamp(100, 5000) as u32,
        drift_px: (cfg.drift_px + drift_delta).clamp(0.0, 100.0),
        debug: cfg.debug,
    }
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let step = |hold_delta: i64, drift_delta: f64| {
        let cb = props.on_change.clone();
        let cfg = props.config.clone();
        Callback::from(move |_: MouseEvent| cb.emit(adjust(&cfg, hold_delta, drift_delta)))
    };
    let toggle_debug_cb = {
        let cb = props.on_change.clone();
        let cfg = props.config.clone();
        Callback::from(move |_| {
            cb.emit(ShimConfig {
                debug: !cfg.debug,
                ..cfg.clone()
            })
        })
    };
    let reset_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| cb.emit(ShimConfig::default()))
    };

    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:6px; font-size:12px;">
        <div style="display:flex; align-items:center; gap:6px;">
            <span style="min-width:90px;">{ format!("Hold {} ms", props.config.hold_ms) }</span>
            <button onclick={step(-50, 0.0)}>{"-"}</button>
            <button onclick={step(50, 0.0)}>{"+"}</button>
        </div>
        <div style="display:flex; align-items:center; gap:6px;">
            <span style="min-width:90px;">{ format!("Drift {} px", props.config.drift_px) }</span>
            <button onclick={step(0, -2.0)}>{"-"}</button>
            <button onclick={step(0, 2.0)}>{"+"}</button>
        </div>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={props.config.debug} onclick={toggle_debug_cb} />
            <span>{"Console logging"}</span>
        </label>
        <button onclick={reset_cb}>{"Defaults"}</button>
    </div>}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_clamps() {
        let cfg = ShimConfig::default();
        assert_eq!(adjust(&cfg, 50, 0.0).hold_ms, 550);
        assert_eq!(adjust(&cfg, -10_000, 0.0).hold_ms, 100);
        assert_eq!(adjust(&cfg, 0, -50.0).drift_px, 0.0);
        assert_eq!(adjust(&cfg, 0, 2.0).drift_px, 12.0);
    }
}
