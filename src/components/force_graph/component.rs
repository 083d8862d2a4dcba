use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::ForceGraphState;
use super::types::CanvasData;
use crate::pathways::{LayoutConfig, Point};

type Shared<T> = Rc<RefCell<Option<T>>>;

/// Canvas-relative pointer position.
fn pointer(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn container_size(canvas: &HtmlCanvasElement, fallback: (f64, f64)) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or(fallback)
}

/// Force-directed canvas for the visible pathway graph.
///
/// `data` is re-synced into the running simulation whenever it changes;
/// nodes already on screen keep their place. A press released without
/// dragging reports the node id through `on_node_click`.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<CanvasData>,
	#[prop(into)] on_node_click: Callback<String>,
	#[prop(optional)] layout: LayoutConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Shared<ForceGraphState> = Rc::new(RefCell::new(None));
	let animate_init: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let resize_cb_init: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let state_init = state.clone();
	let layout_size = (layout.width, layout.height);
	let simulation_config = layout.simulation.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("No window; graph canvas not started");
			return;
		};

		let (w, h) = container_size(&canvas, layout_size);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("Canvas 2d context unavailable");
			return;
		};
		*state_init.borrow_mut() = Some(ForceGraphState::new(
			data.get_untracked(),
			simulation_config.clone(),
			layout_size,
			w,
			h,
		));
		debug!("Graph canvas mounted at {w}x{h}");

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = container_size(&canvas_resize, layout_size);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, resize_inner) =
			(state_init.clone(), animate_init.clone(), resize_cb_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			// Route changed away: stop the loop and the resize listener.
			if !canvas.is_connected() {
				if let Some(cb) = resize_inner.borrow_mut().take() {
					let _ = win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				debug!("Graph canvas detached");
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_sync = state.clone();
	Effect::new(move |_| {
		let next = data.get();
		if let Some(ref mut s) = *state_sync.borrow_mut() {
			if s.data != next {
				s.set_data(next);
			}
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(id) = s.node_at_position(x, y) {
				s.press_node(id, x, y);
			} else {
				s.pan.active = true;
				s.pan.start = Point::new(x, y);
				s.pan.transform_start = Point::new(s.transform.x, s.transform.y);
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.is_dragging() {
				s.drag_pointer(x, y);
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start.x + (x - s.pan.start.x);
				s.transform.y = s.pan.transform_start.y + (y - s.pan.start.y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let clicked = state_mu.borrow_mut().as_mut().and_then(|s| s.release());
		if let Some(id) = clicked {
			on_node_click.run(id);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			let _ = s.release();
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (s.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / s.transform.k;
			s.transform.x = x - (x - s.transform.x) * ratio;
			s.transform.y = y - (y - s.transform.y) * ratio;
			s.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
