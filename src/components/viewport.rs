use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::state::{GestureSample, TouchPoint, Tween, ViewportConfig, ViewportController};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct ResponsiveViewportProps {
    #[prop_or(0.2)]
    pub min_zoom_scale: f64,
    #[prop_or(2.0)]
    pub max_zoom_scale: f64,
    #[prop_or(1.0)]
    pub background_ratio: f64,
    #[prop_or(0.1)]
    pub zoom_dead_zone: f64,
    #[prop_or(0.15)]
    pub zoom_response: f64,
    #[prop_or(4.0)]
    pub zoom_damping: f64,
    /// Passthrough: toggles container overflow, not consumed by the gesture math.
    #[prop_or(true)]
    pub scroll_enabled: bool,
    /// Passthrough layout style for the transformed child.
    #[prop_or_default]
    pub initial_style: String,
    /// Emitted once with 1.0 on mount and with the committed zoom on every release.
    pub update_zoom_level: Callback<f64>,
    #[prop_or_default]
    pub children: Html,
}

fn config_from_props(props: &ResponsiveViewportProps) -> ViewportConfig {
    ViewportConfig {
        min_zoom_scale: props.min_zoom_scale,
        max_zoom_scale: props.max_zoom_scale,
        background_ratio: props.background_ratio,
        zoom_dead_zone: props.zoom_dead_zone,
        zoom_response: props.zoom_response,
        zoom_damping: props.zoom_damping,
        ..ViewportConfig::default()
    }
    .normalized()
}

/// Pinch-to-zoom, pan-clamped wrapper around arbitrary child content.
///
/// Raw touch events are wired through non-reactive listeners and the transform
/// is written straight onto the content element, so a gesture never re-renders
/// the child tree.
#[function_component(ResponsiveViewport)]
pub fn responsive_viewport(props: &ResponsiveViewportProps) -> Html {
    let outer_ref = use_node_ref();
    let content_ref = use_node_ref();
    let config = config_from_props(props);
    let controller = use_mut_ref(|| ViewportController::new(config));
    let tween = use_mut_ref(|| None::<Tween>);
    let raf_id = use_mut_ref(|| None::<i32>);

    // Keep tunables current when the parent edits them after mount.
    {
        let controller = controller.clone();
        use_effect_with(config, move |cfg| {
            controller.borrow_mut().config = *cfg;
            || ()
        });
    }

    // Mount: layout measurement, touch listeners, snap-back loop.
    {
        let outer_ref = outer_ref.clone();
        let content_ref = content_ref.clone();
        let controller = controller.clone();
        let tween = tween.clone();
        let raf_id = raf_id.clone();
        let update_zoom_level = props.update_zoom_level.clone();
        let initial_style = props.initial_style.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let outer: HtmlElement = outer_ref.cast::<HtmlElement>().expect("viewport container");
            let content: Element = content_ref.cast::<Element>().expect("viewport content");

            // Shared apply-transform closure: touch handlers and the snap-back
            // loop both write the current transform onto the content element.
            let apply: Rc<dyn Fn()> = {
                let controller = controller.clone();
                let content = content.clone();
                let initial_style = initial_style.clone();
                Rc::new(move || {
                    let c = controller.borrow();
                    let style = format!("{} {}", initial_style, c.transform_style());
                    let _ = content.set_attribute("style", style.trim());
                })
            };

            let measure = {
                let outer = outer.clone();
                let controller = controller.clone();
                move || {
                    let rect = outer.get_bounding_client_rect();
                    controller.borrow_mut().on_layout(rect.width(), rect.height());
                }
            };
            measure();
            apply();
            update_zoom_level.emit(1.0);

            let resize_cb = {
                let measure = measure.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    measure();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();

            let touch_start_cb = {
                let controller = controller.clone();
                let tween = tween.clone();
                let raf_id = raf_id.clone();
                let window = window.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let count = e.touches().length();
                    if count != 2 {
                        return;
                    }
                    // A fresh pinch supersedes an in-flight snap-back.
                    *tween.borrow_mut() = None;
                    if let Some(id) = raf_id.borrow_mut().take() {
                        let _ = window.cancel_animation_frame(id);
                    }
                    controller.borrow_mut().on_gesture_start(count);
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            outer
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_move_cb = {
                let outer_mv = outer.clone();
                let controller = controller.clone();
                let apply = apply.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let changed = e.changed_touches();
                    if changed.length() != 2 {
                        return;
                    }
                    // Malformed payloads skip the sample, never crash it.
                    let (Some(t0), Some(t1)) = (changed.item(0), changed.item(1)) else {
                        return;
                    };
                    let rect = outer_mv.get_bounding_client_rect();
                    let sample = GestureSample {
                        first: TouchPoint {
                            x: t0.client_x() as f64 - rect.left(),
                            y: t0.client_y() as f64 - rect.top(),
                        },
                        second: TouchPoint {
                            x: t1.client_x() as f64 - rect.left(),
                            y: t1.client_y() as f64 - rect.top(),
                        },
                    };
                    if controller.borrow_mut().on_gesture_move(sample) {
                        apply();
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            outer
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_end_cb = {
                let controller = controller.clone();
                let tween = tween.clone();
                let raf_id = raf_id.clone();
                let apply = apply.clone();
                let window = window.clone();
                let update_zoom_level = update_zoom_level.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if e.touches().length() != 0 {
                        return;
                    }
                    let Some(outcome) = controller.borrow_mut().on_gesture_end() else {
                        return;
                    };
                    update_zoom_level.emit(outcome.zoom);
                    let Some((to_x, to_y)) = outcome.snap else {
                        return;
                    };
                    let (from_x, from_y, duration) = {
                        let c = controller.borrow();
                        (c.pan.x, c.pan.y, c.config.snap_duration_ms)
                    };
                    clog(&format!("snap-back to ({to_x:.1}, {to_y:.1})"));
                    *tween.borrow_mut() = Some(Tween::new(
                        (from_x, from_y),
                        (to_x, to_y),
                        js_sys::Date::now(),
                        duration,
                    ));
                    // Animation frame loop driving the tween until it finishes
                    // or a new gesture clears it.
                    let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                        Rc::new(RefCell::new(None));
                    let closure_cell_clone = closure_cell.clone();
                    let controller_loop = controller.clone();
                    let tween_loop = tween.clone();
                    let raf_id_loop = raf_id.clone();
                    let apply_loop = apply.clone();
                    let window_loop = window.clone();
                    *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                        let sampled = (*tween_loop.borrow()).map(|tw| tw.sample(js_sys::Date::now()));
                        let Some(((x, y), done)) = sampled else {
                            *raf_id_loop.borrow_mut() = None;
                            return;
                        };
                        controller_loop.borrow_mut().apply_snap(x, y);
                        apply_loop();
                        if done {
                            *tween_loop.borrow_mut() = None;
                            *raf_id_loop.borrow_mut() = None;
                            return;
                        }
                        if let Ok(id) = window_loop.request_animation_frame(
                            closure_cell_clone
                                .borrow()
                                .as_ref()
                                .unwrap()
                                .as_ref()
                                .unchecked_ref(),
                        ) {
                            *raf_id_loop.borrow_mut() = Some(id);
                        }
                    })
                        as Box<dyn FnMut()>));
                    if let Ok(id) = window.request_animation_frame(
                        closure_cell
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    ) {
                        *raf_id.borrow_mut() = Some(id);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            outer
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            outer
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Cleanup
            let window_clone = window.clone();
            move || {
                let _ = outer.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = outer.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = outer.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = outer.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                let _keep_alive = (&touch_start_cb, &touch_move_cb, &touch_end_cb, &resize_cb);
            }
        });
    }

    let overflow = if props.scroll_enabled { "auto" } else { "hidden" };
    let outer_style = format!(
        "height:100%; width:100%; display:flex; justify-content:center; align-items:center; overflow:{}; touch-action:none;",
        overflow
    );
    html! {
        <div ref={outer_ref} style={outer_style}>
            <div ref={content_ref} style={props.initial_style.clone()}>
                { props.children.clone() }
            </div>
        </div>
    }
}
