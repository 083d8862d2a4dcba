use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, node_radius};
use super::types::CanvasNode;
use crate::pathways::{EdgeKind, NodeType};

const BACKGROUND: &str = "#0f172a";
const SELECTED_RING: &str = "#f59e0b";
const CONNECTED_RING: &str = "#67e8f9";

fn node_color(node_type: NodeType) -> &'static str {
	match node_type {
		NodeType::Major => "#06b6d4",
		NodeType::University => "#14b8a6",
		NodeType::Program => "#6366f1",
	}
}

fn edge_rgb(kind: EdgeKind) -> &'static str {
	match kind {
		EdgeKind::MajorToUniversity => "45, 212, 191",
		EdgeKind::UniversityToProgram => "129, 140, 248",
	}
}

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, dash, gap) = (1.5 / k, 8.0 / k, 4.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);

	for link in &state.data.links {
		let (Some(a), Some(b)) = (
			state.positions.get(&link.source),
			state.positions.get(&link.target),
		) else {
			continue;
		};
		let (Some(source), Some(target)) = (state.data.node(&link.source), state.data.node(&link.target)) else {
			continue;
		};
		let (dx, dy) = (b.x - a.x, b.y - a.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}

		let is_highlighted = state.is_highlighted(&link.source) && state.is_highlighted(&link.target);

		// t=0: every edge at 0.5; t=1: highlighted at 0.9, others at 0.1
		let (alpha, width) = if is_highlighted {
			(0.5 + 0.4 * t, line_width * (1.0 + 0.3 * t))
		} else {
			(0.5 - 0.4 * t, line_width * (1.0 - 0.3 * t))
		};

		ctx.set_stroke_style_str(&format!("rgba({}, {})", edge_rgb(link.kind), alpha));
		ctx.set_line_width(width);
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash),
			&JsValue::from_f64(gap),
		));
		ctx.set_line_dash_offset(dash_offset);

		let (ux, uy) = (dx / dist, dy / dist);
		let (r1, r2) = (node_radius(source.node_type), node_radius(target.node_type));
		ctx.begin_path();
		ctx.move_to(a.x + ux * r1, a.y + uy * r1);
		ctx.line_to(b.x - ux * r2, b.y - uy * r2);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
	);

	// Dimmed nodes first so highlighted ones paint on top.
	for node in &state.data.nodes {
		if has_highlight && state.is_highlighted(&node.id) {
			continue;
		}
		draw_node(state, ctx, node, 1.0 - 0.7 * t, 1.0 - 0.15 * t, 0.0);
	}

	if !has_highlight {
		return;
	}

	for node in &state.data.nodes {
		if !state.is_highlighted(&node.id) {
			continue;
		}
		let (scale, glow) = if state.is_hovered(&node.id) {
			(1.0 + 0.35 * t, 1.8 + 1.2 * t)
		} else {
			(1.0 + 0.2 * t, 1.4 + 0.6 * t)
		};
		draw_node(state, ctx, node, 1.0, scale, glow);
	}
}

fn draw_node(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	node: &CanvasNode,
	alpha: f64,
	scale: f64,
	glow: f64,
) {
	let Some(p) = state.positions.get(&node.id) else {
		return;
	};
	let k = state.transform.k;
	let t = ease_out_cubic(state.hover.highlight_t);
	let radius = node_radius(node.node_type) * scale;

	if glow > 0.0 && t > 0.01 {
		let glow_radius = node_radius(node.node_type) * glow;
		if let Ok(gradient) = ctx.create_radial_gradient(p.x, p.y, radius * 0.3, p.x, p.y, glow_radius) {
			let glow_alpha = if state.is_hovered(&node.id) { 0.35 * t } else { 0.2 * t };
			let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", glow_alpha));
			let _ = gradient.add_color_stop(0.6, &format!("rgba(200, 240, 255, {})", glow_alpha * 0.3));
			let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
			ctx.begin_path();
			let _ = ctx.arc(p.x, p.y, glow_radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}
	}

	ctx.set_global_alpha(alpha);
	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(node_color(node.node_type));
	ctx.fill();

	let ring = if node.selected {
		Some((SELECTED_RING, 3.0))
	} else if node.highlighted {
		Some((CONNECTED_RING, 2.0))
	} else {
		None
	};
	if let Some((color, width)) = ring {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, radius + 3.0 / k, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(width / k);
		ctx.stroke();
	}

	let weight = if node.node_type == NodeType::University || node.selected {
		"600"
	} else {
		"400"
	};
	ctx.set_fill_style_str("#e2e8f0");
	ctx.set_font(&format!("{weight} {}px sans-serif", 12.0 / k.max(0.5)));
	ctx.set_text_align("center");
	let _ = ctx.fill_text(&node.label, p.x, p.y + radius + 14.0 / k.max(0.5));
	ctx.set_global_alpha(1.0);
}
