use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_zoom_reset: Callback<()>,
}

/// Zoom button cluster shared by the image modal and the gallery modal.
#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zr = {
        let cb = props.on_zoom_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div class="zoom-controls" style="position:absolute; top:12px; left:12px; display:flex; gap:6px; z-index:2;">
        <button onclick={zi} title="Zoom In" style="width:32px; height:32px;">{"+"}</button>
        <button onclick={zo} title="Zoom Out" style="width:32px; height:32px;">{"-"}</button>
        <button onclick={zr} title="Reset Zoom" style="width:32px; height:32px;">{"⌂"}</button>
    </div>}
}
