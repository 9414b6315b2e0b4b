use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::about::About;
use super::activities::Activities;
use super::back_to_top::BackToTop;
use super::contact_form::ContactForm;
use super::gallery_viewer::GalleryViewerModal;
use super::hero::Hero;
use super::image_viewer::ImageViewerModal;
use super::navbar::Navbar;
use super::projects::Projects;
use super::skills::Skills;
use crate::model::SiteContent;
use crate::state::GallerySession;
use crate::util::{clog, window_scroll_y};

const SCROLL_POSITION_KEY: &str = "scrollPosition";

#[function_component(App)]
pub fn app() -> Html {
    let content = use_memo((), |_| SiteContent::load());
    // At most one open request per modal kind; opening again replaces
    // the previous session, and the key forces a full remount.
    let viewer = use_state(|| None::<AttrValue>);
    let gallery = use_state(|| None::<GallerySession>);

    // Restore the pre-reload scroll position, and save it again on
    // beforeunload. The cached value is cleared once consumed.
    use_effect_with((), move |_| {
        let window = web_sys::window();
        if let Some(win) = &window {
            if let Ok(Some(store)) = win.session_storage() {
                if let Ok(Some(raw)) = store.get_item(SCROLL_POSITION_KEY) {
                    if let Ok(y) = raw.parse::<f64>() {
                        win.scroll_to_with_x_and_y(0.0, y);
                    }
                    let _ = store.remove_item(SCROLL_POSITION_KEY);
                }
            }
        }
        let unload_cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.session_storage() {
                    let _ = store.set_item(SCROLL_POSITION_KEY, &window_scroll_y().to_string());
                }
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(win) = &window {
            let _ = win.add_event_listener_with_callback(
                "beforeunload",
                unload_cb.as_ref().unchecked_ref(),
            );
        }
        move || {
            if let Some(win) = &window {
                let _ = win.remove_event_listener_with_callback(
                    "beforeunload",
                    unload_cb.as_ref().unchecked_ref(),
                );
            }
            drop(unload_cb);
        }
    });

    let open_image = {
        let viewer = viewer.clone();
        Callback::from(move |src: String| viewer.set(Some(src.into())))
    };
    let open_gallery = {
        let gallery = gallery.clone();
        Callback::from(move |(images, title): (Vec<String>, String)| {
            match GallerySession::new(images, title) {
                Some(session) => gallery.set(Some(session)),
                None => clog("gallery open rejected: empty image list"),
            }
        })
    };
    let close_viewer = {
        let viewer = viewer.clone();
        Callback::from(move |_| viewer.set(None))
    };
    let close_gallery = {
        let gallery = gallery.clone();
        Callback::from(move |_| gallery.set(None))
    };

    let profile = &content.profile;

    html! {
        <div style="background:#0f0e13; color:#fff; min-height:100vh; font-family:system-ui, sans-serif;">
            <Navbar brand={profile.name.clone()} />
            <Hero typing_texts={profile.typing_texts.clone()} tagline={profile.tagline.clone()} />
            <About name={profile.name.clone()} portrait={profile.portrait.clone()} on_open_image={open_image.clone()} />
            <Skills categories={content.skills.clone()} />
            <Projects projects={content.projects.clone()} on_open_image={open_image.clone()} on_open_gallery={open_gallery.clone()} />
            <Activities activities={content.activities.clone()} on_open_gallery={open_gallery} />
            <ContactForm email={profile.email.clone()} />
            <BackToTop />
            if let Some(src) = (*viewer).clone() {
                <ImageViewerModal key={src.to_string()} image_src={src.clone()} on_close={close_viewer} />
            }
            if let Some(session) = (*gallery).clone() {
                <GalleryViewerModal key={session.identity()} session={session.clone()} on_close={close_gallery} />
            }
        </div>
    }
}
