//! Chart Canvas Component
//!
//! Owns one chart slot: redraws when `spec` changes and releases the
//! chart when the component unmounts.

use leptos::html;
use leptos::prelude::*;

use crate::charts::{ChartSlot, ChartSpec};
use crate::context::use_session;

#[component]
pub fn ChartCanvas(
    slot: ChartSlot,
    #[prop(into)] spec: Signal<ChartSpec>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let ctx = use_session();
    let canvas_ref = NodeRef::<html::Canvas>::new();

    Effect::new(move |_| {
        let spec = spec.get();
        if let Some(canvas) = canvas_ref.get() {
            ctx.mount_chart(slot, &canvas, &spec);
        }
    });

    on_cleanup(move || ctx.dispose_chart(slot));

    view! {
        <div class=format!("chart-container {}", class)>
            <canvas id=slot.canvas_id() node_ref=canvas_ref></canvas>
        </div>
    }
}
