use yew::prelude::*;

use super::{
    settings_modal::SettingsModal, viewport::ResponsiveViewport, zoom_display::ZoomDisplay,
};
use crate::state::ViewportConfig;

const SETTINGS_KEY: &str = "vp_gesture_settings";

#[function_component(App)]
pub fn app() -> Html {
    let zoom = use_state(|| 1.0_f64);
    let settings = use_state(ViewportConfig::default);
    let open_settings = use_state(|| false);

    // Load persisted tunables
    {
        let settings = settings.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                        if let Ok(cfg) = serde_json::from_str::<ViewportConfig>(&raw) {
                            settings.set(cfg.normalized());
                        }
                    }
                }
            }
            || ()
        });
    }
    // Persist tunable changes
    {
        let settings_handle = settings.clone();
        use_effect_with(*settings, move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(s) = serde_json::to_string(&*settings_handle) {
                        let _ = store.set_item(SETTINGS_KEY, &s);
                    }
                }
            }
            || ()
        });
    }

    let update_zoom_level = {
        let zoom = zoom.clone();
        Callback::from(move |z: f64| zoom.set(z))
    };
    let open_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(true))
    };
    let close_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(false))
    };
    let on_change = {
        let settings = settings.clone();
        Callback::from(move |cfg: ViewportConfig| settings.set(cfg.normalized()))
    };
    let on_reset = {
        let settings = settings.clone();
        Callback::from(move |_| settings.set(ViewportConfig::default()))
    };

    let cfg = *settings;
    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116; color:#c9d1d9;">
            <ResponsiveViewport
                min_zoom_scale={cfg.min_zoom_scale}
                max_zoom_scale={cfg.max_zoom_scale}
                background_ratio={cfg.background_ratio}
                zoom_dead_zone={cfg.zoom_dead_zone}
                zoom_response={cfg.zoom_response}
                zoom_damping={cfg.zoom_damping}
                update_zoom_level={update_zoom_level}
            >
                <div style="width:70vmin; height:70vmin; border:1px solid #30363d; border-radius:8px; background-image:linear-gradient(#1d2430 1px, transparent 1px), linear-gradient(90deg, #1d2430 1px, transparent 1px); background-size:40px 40px; background-color:#161b22;">
                    <p style="padding:12px; margin:0; font-size:13px; opacity:0.8;">
                        {"Pinch with two fingers to zoom and pan. Release outside the bounds and the content snaps back."}
                    </p>
                </div>
            </ResponsiveViewport>
            <ZoomDisplay zoom={*zoom} on_open_settings={open_cb} />
            <SettingsModal
                show={*open_settings}
                config={cfg}
                on_change={on_change}
                on_reset={on_reset}
                on_close={close_cb}
            />
        </div>
    }
}
