// Single-image modal with zoom, drag-pan and pinch support.

use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::modal::{self, use_modal_close, use_modal_gestures, use_show_transition};
use super::zoom_controls::ZoomControls;
use crate::state::ZoomState;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageViewerProps {
    pub image_src: AttrValue,
    pub on_close: Callback<()>,
}

/// One open/close lifecycle of the single-image viewer. The parent holds
/// at most one of these at a time and keys it by the image source, so a
/// second open replaces this instance wholesale, listeners included.
#[function_component(ImageViewerModal)]
pub fn image_viewer_modal(props: &ImageViewerProps) -> Html {
    let overlay_ref = use_node_ref();
    let container_ref = use_node_ref();
    let image_ref = use_node_ref();
    let zoom = use_mut_ref(ZoomState::default);

    let show = use_show_transition();
    let close = use_modal_close(show.clone(), overlay_ref.clone(), props.on_close.clone());

    let on_key = {
        let close = close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                close.emit(());
            }
        })
    };
    use_modal_gestures(container_ref.clone(), image_ref.clone(), zoom.clone(), on_key);

    let (zoom_in, zoom_out, zoom_reset) = modal::zoom_button_callbacks(&zoom, &image_ref);
    let on_backdrop = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_close_btn = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    html! {
        <div ref={overlay_ref} class={classes!("image-modal", (*show).then_some("show"))} style={modal::overlay_style(*show)}>
            <div class="modal-backdrop" onclick={on_backdrop} style="position:absolute; inset:0; background:rgba(0,0,0,0.85);"></div>
            <div class="modal-content" style="position:relative; max-width:90vw; max-height:90vh;">
                <button class="modal-close" onclick={on_close_btn} style="position:absolute; top:-36px; right:0; font-size:24px; background:none; border:none; color:#fff; cursor:pointer;">{"×"}</button>
                <ZoomControls on_zoom_in={zoom_in} on_zoom_out={zoom_out} on_zoom_reset={zoom_reset} />
                <div ref={container_ref} class="image-container" style="overflow:hidden; border-radius:8px;">
                    <img ref={image_ref} src={props.image_src.clone()} alt="Preview" class="modal-image"
                        style="display:block; max-width:90vw; max-height:85vh; transition:transform 0.1s ease-out;" />
                </div>
            </div>
        </div>
    }
}
