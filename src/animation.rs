//! GSAP Bridge
//!
//! Plays controller tweens through the GSAP global loaded by index.html.
//! Without GSAP on the page tweens are skipped, but completion commands
//! still run so state never waits on an animation that will not happen.

use board_core::{Props, Tween};
use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::context::DashboardContext;

fn global(name: &str) -> Option<JsValue> {
    let value = Reflect::get(&js_sys::global(), &JsValue::from_str(name)).ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

fn js_err(err: JsValue) -> String {
    format!("{err:?}")
}

fn method(object: &JsValue, name: &str) -> Result<Function, String> {
    Reflect::get(object, &JsValue::from_str(name))
        .map_err(js_err)?
        .dyn_into::<Function>()
        .map_err(|_| format!("gsap.{name} is not a function"))
}

fn to_js(props: &Props) -> Result<JsValue, String> {
    props
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

/// Register the ScrollTrigger plugin if the page loaded it
pub fn register_plugins() {
    let Some(gsap) = global("gsap") else {
        tracing::warn!("GSAP not found, animations are disabled");
        return;
    };
    let Some(plugin) = global("ScrollTrigger") else {
        tracing::warn!("ScrollTrigger not found, scroll-triggered tweens play immediately");
        return;
    };
    let registered = method(&gsap, "registerPlugin").and_then(|f| f.call1(&gsap, &plugin).map_err(js_err));
    if let Err(err) = registered {
        tracing::warn!(%err, "could not register ScrollTrigger");
    }
}

/// Tween end state plus GSAP timing options
fn tween_vars(tween: &Tween) -> Props {
    let mut vars = tween.to.clone();
    vars.insert("duration".to_string(), json!(f64::from(tween.duration_ms) / 1000.0));
    if tween.delay_ms > 0 {
        vars.insert("delay".to_string(), json!(f64::from(tween.delay_ms) / 1000.0));
    }
    if let Some(ease) = tween.ease {
        vars.insert("ease".to_string(), json!(ease));
    }
    if let Some(trigger) = tween.scroll_trigger {
        vars.insert(
            "scrollTrigger".to_string(),
            json!({
                "trigger": tween.target.selector(),
                "start": trigger.start,
                "toggleActions": trigger.toggle_actions,
            }),
        );
    }
    vars
}

/// Returns Ok(false) when GSAP is not available
fn try_play(ctx: DashboardContext, tween: &Tween) -> Result<bool, String> {
    let Some(gsap) = global("gsap") else {
        return Ok(false);
    };
    let target = JsValue::from_str(&tween.target.selector());
    let vars = to_js(&tween_vars(tween))?;

    if let Some(command) = tween.on_complete.clone() {
        let callback = Closure::once_into_js(move || ctx.dispatch(command));
        Reflect::set(&vars, &JsValue::from_str("onComplete"), &callback).map_err(js_err)?;
    }

    match &tween.from {
        Some(from) => {
            let from = to_js(from)?;
            method(&gsap, "fromTo")?.call3(&gsap, &target, &from, &vars).map_err(js_err)?;
        }
        None => {
            method(&gsap, "to")?.call2(&gsap, &target, &vars).map_err(js_err)?;
        }
    }
    Ok(true)
}

pub fn play(ctx: DashboardContext, tween: Tween) {
    let played = match try_play(ctx, &tween) {
        Ok(played) => played,
        Err(err) => {
            tracing::warn!(anim = %tween.target.key(), %err, "tween failed");
            false
        }
    };
    if !played {
        if let Some(command) = tween.on_complete {
            ctx.dispatch(command);
        }
    }
}
