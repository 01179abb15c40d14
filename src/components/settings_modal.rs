use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::ViewportConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub config: ViewportConfig,
    pub on_change: Callback<ViewportConfig>,
    pub on_reset: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let cfg = props.config;
    let on_change = props.on_change.clone();
    let slider = |label: &'static str,
                  value: f64,
                  min: &'static str,
                  max: &'static str,
                  step: &'static str,
                  set: fn(&mut ViewportConfig, f64)| {
        let on_change = on_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
            if let Some(input) = input {
                if let Ok(v) = input.value().parse::<f64>() {
                    let mut next = cfg;
                    set(&mut next, v);
                    on_change.emit(next);
                }
            }
        });
        html! {<label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <span style="flex:1;">{label}</span>
            <input type="range" min={min} max={max} step={step} value={value.to_string()} {oninput} style="flex:2;" />
            <span style="width:48px; text-align:right;">{format!("{value:.2}")}</span>
        </label>}
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Gesture Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                { slider("Min zoom", cfg.min_zoom_scale, "0.1", "1", "0.05", |c, v| c.min_zoom_scale = v) }
                { slider("Max zoom", cfg.max_zoom_scale, "1", "5", "0.1", |c, v| c.max_zoom_scale = v) }
                { slider("Background ratio", cfg.background_ratio, "0.25", "2", "0.05", |c, v| c.background_ratio = v) }
                { slider("Pinch dead zone", cfg.zoom_dead_zone, "0", "0.5", "0.01", |c, v| c.zoom_dead_zone = v) }
                { slider("Zoom response", cfg.zoom_response, "0.05", "1", "0.05", |c, v| c.zoom_response = v) }
            </div>
            <div style="display:flex; gap:8px;">
                <button onclick={reset_cb} style="flex:1;">{"Reset to defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Changes apply to the next pinch and persist in this browser."}</div>
        </div>
    </div>}
}
