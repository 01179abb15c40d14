use crate::util::format_zoom;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomDisplayProps {
    pub zoom: f64,
    pub on_open_settings: Callback<()>,
}

#[function_component(ZoomDisplay)]
pub fn zoom_display(props: &ZoomDisplayProps) -> Html {
    let open_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); display:flex; align-items:center; gap:10px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:6px 12px;">
        <span style="font-size:18px; font-weight:600;">{ format_zoom(props.zoom) }</span>
        <button onclick={open_cb} style="padding:4px 10px; font-size:12px;">{"Settings"}</button>
    </div>}
}
