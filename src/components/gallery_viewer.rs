// Multi-image gallery modal: cursor navigation over an ordered image
// list, plus the same zoom/pan/pinch affordances as the single viewer.

use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::modal::{self, apply_zoom, use_modal_close, use_modal_gestures, use_show_transition};
use super::zoom_controls::ZoomControls;
use crate::state::{GallerySession, ZoomState};

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryViewerProps {
    /// Validated session; `GallerySession::new` already rejected empty
    /// image lists at the trigger site.
    pub session: GallerySession,
    pub on_close: Callback<()>,
}

#[function_component(GalleryViewerModal)]
pub fn gallery_viewer_modal(props: &GalleryViewerProps) -> Html {
    let overlay_ref = use_node_ref();
    let container_ref = use_node_ref();
    let image_ref = use_node_ref();
    let zoom = use_mut_ref(ZoomState::default);
    let session = {
        let initial = props.session.clone();
        use_mut_ref(move || initial)
    };
    // Render trigger; the session cell is the source of truth.
    let index = use_state(|| props.session.current_index());

    let show = use_show_transition();
    let close = use_modal_close(show.clone(), overlay_ref.clone(), props.on_close.clone());

    // Every navigation path funnels through here, so the zoom reset and
    // the re-render happen exactly once per cursor move.
    let go_to = {
        let session = session.clone();
        let zoom = zoom.clone();
        let image_ref = image_ref.clone();
        let index = index.clone();
        Callback::from(move |i: isize| {
            let mut s = session.borrow_mut();
            let mut z = zoom.borrow_mut();
            s.go_to(i, &mut z);
            apply_zoom(&image_ref, &z);
            index.set(s.current_index());
        })
    };

    let on_key = {
        let close = close.clone();
        let go_to = go_to.clone();
        let session = session.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Escape" => close.emit(()),
            "ArrowLeft" => {
                let (multi, cur) = {
                    let s = session.borrow();
                    (s.is_multi(), s.current_index() as isize)
                };
                if multi {
                    go_to.emit(cur - 1);
                }
            }
            "ArrowRight" => {
                let (multi, cur) = {
                    let s = session.borrow();
                    (s.is_multi(), s.current_index() as isize)
                };
                if multi {
                    go_to.emit(cur + 1);
                }
            }
            _ => {}
        })
    };
    use_modal_gestures(container_ref.clone(), image_ref.clone(), zoom.clone(), on_key);

    let (zoom_in, zoom_out, zoom_reset) = modal::zoom_button_callbacks(&zoom, &image_ref);
    let on_prev = {
        let go_to = go_to.clone();
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let cur = session.borrow().current_index() as isize;
            go_to.emit(cur - 1);
        })
    };
    let on_next = {
        let go_to = go_to.clone();
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let cur = session.borrow().current_index() as isize;
            go_to.emit(cur + 1);
        })
    };
    let on_backdrop = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_close_btn = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let s = session.borrow();
    let title = s.title().to_string();
    let counter = s.counter();
    let is_multi = s.is_multi();
    let cur = s.current_index();
    let images: Vec<String> = s.images().to_vec();
    drop(s);

    let nav_btn_style = "background:rgba(22,27,34,0.8); border:1px solid #30363d; color:#fff; \
         font-size:28px; width:44px; height:44px; border-radius:50%; cursor:pointer; flex:0 0 auto;";

    html! {
        <div ref={overlay_ref} class={classes!("gallery-modal", (*show).then_some("show"))} style={modal::overlay_style(*show)}>
            <div class="modal-backdrop" onclick={on_backdrop} style="position:absolute; inset:0; background:rgba(0,0,0,0.85);"></div>
            <div class="gallery-content" style="position:relative; max-width:92vw; display:flex; flex-direction:column; align-items:center; gap:12px;">
                <button class="modal-close" onclick={on_close_btn} style="position:absolute; top:-36px; right:0; font-size:24px; background:none; border:none; color:#fff; cursor:pointer;">{"×"}</button>
                <h3 class="gallery-title" style="margin:0; color:#fff;">{ title.clone() }</h3>
                <ZoomControls on_zoom_in={zoom_in} on_zoom_out={zoom_out} on_zoom_reset={zoom_reset} />
                <div class="gallery-navigation" style="display:flex; align-items:center; gap:12px;">
                    if is_multi {
                        <button class="nav-btn prev-btn" onclick={on_prev} style={nav_btn_style}>{"‹"}</button>
                    }
                    <div ref={container_ref} class="gallery-image-container" style="overflow:hidden; border-radius:8px;">
                        <img ref={image_ref} src={images[cur].clone()} alt={title.clone()} class="gallery-image"
                            style="display:block; max-width:80vw; max-height:70vh; transition:transform 0.1s ease-out;" />
                    </div>
                    if is_multi {
                        <button class="nav-btn next-btn" onclick={on_next} style={nav_btn_style}>{"›"}</button>
                    }
                </div>
                if is_multi {
                    <div class="gallery-counter" style="color:#b9b6c9; font-size:14px;">{ counter }</div>
                    <div class="gallery-thumbnails" style="display:flex; gap:8px; flex-wrap:wrap; justify-content:center; max-width:80vw;">
                        { for images.iter().enumerate().map(|(i, img)| {
                            let go_to = go_to.clone();
                            let onclick = Callback::from(move |_: MouseEvent| go_to.emit(i as isize));
                            let active = i == cur;
                            html! {
                                <img key={i} src={img.clone()} alt={format!("Thumbnail {}", i + 1)}
                                    class={classes!("thumbnail", active.then_some("active"))}
                                    {onclick}
                                    style={format!(
                                        "width:56px; height:42px; object-fit:cover; cursor:pointer; border-radius:4px; border:2px solid {}; opacity:{};",
                                        if active { "#58a6ff" } else { "transparent" },
                                        if active { "1" } else { "0.6" },
                                    )} />
                            }
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}
