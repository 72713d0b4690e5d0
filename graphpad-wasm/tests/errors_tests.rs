use graphpad_wasm::GraphEditor;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

fn notice(v: &JsValue) -> Option<String> {
    let err = Reflect::get(v, &JsValue::from_str("error")).ok()?;
    let data = Reflect::get(&err, &JsValue::from_str("data")).ok()?;
    Reflect::get(&data, &JsValue::from_str("notice")).ok()?.as_string()
}

#[wasm_bindgen_test]
fn invalid_ids_and_numbers_return_typed_errors() {
    let mut g = GraphEditor::new();
    let ver = g.geom_version();
    // invalid node id
    let r = g.move_node_res(12345, 0.0, 0.0);
    assert!(is_err(&r, "invalid_id"));
    assert_eq!(g.geom_version(), ver, "state mutated on error");

    // invalid edge id
    assert!(is_err(&g.remove_edge_res(9999), "invalid_id"));
    assert!(is_err(&g.cycle_direction_res(9999), "invalid_id"));
    assert!(is_err(&g.add_edge_res(0, 1), "invalid_id"));
    assert_eq!(g.geom_version(), ver);

    assert!(is_err(&g.add_node_res(f32::NAN, 0.0), "non_finite"));
    assert!(is_err(&g.pick_res(0.0, f32::INFINITY), "non_finite"));
    assert_eq!(g.geom_version(), ver);
}

#[wasm_bindgen_test]
fn bad_config_is_out_of_range() {
    let mut g = GraphEditor::new();
    let cfg = js_sys::JSON::parse(r#"{"hit_threshold": -2}"#).unwrap();
    assert!(is_err(&g.set_config_res(cfg), "out_of_range"));
    let cfg = js_sys::JSON::parse(r#"{"node_radius": "big"}"#).unwrap();
    assert!(is_err(&g.set_config_res(cfg), "malformed_input"));
}

#[wasm_bindgen_test]
fn refused_loads_report_their_reason() {
    let mut g = GraphEditor::new();
    g.primary_click(10.0, 10.0);
    let ver = g.geom_version();

    let r = g.load_json_res("{not json");
    assert!(is_err(&r, "malformed_input"));
    assert_eq!(notice(&r).as_deref(), Some("Cannot load graph: Invalid format."));

    let r = g.load_json_res(r#"{"nodes": []}"#);
    assert!(is_err(&r, "incomplete_input"));
    assert_eq!(
        notice(&r).as_deref(),
        Some("Cannot load graph: Missing required data(nodes or edges).")
    );

    let r = g.load_json_res(r#"{"nodes": [{"x": 1e30, "y": 0}], "edges": []}"#);
    assert!(is_err(&r, "invalid_number"));

    let obj = js_sys::JSON::parse(r#"{"edges": []}"#).unwrap();
    assert!(is_err(&g.load_json_value_res(obj), "incomplete_input"));
    let obj = js_sys::JSON::parse(r#"{"nodes": 5, "edges": []}"#).unwrap();
    assert!(is_err(&g.load_json_value_res(obj), "malformed_input"));

    assert_eq!(g.geom_version(), ver);
    assert_eq!(g.node_count(), 1);
}

#[wasm_bindgen_test]
fn valid_res_calls_return_values() {
    let mut g = GraphEditor::new();
    let a = g.add_node_res(0.0, 0.0);
    let b = g.add_node_res(100.0, 0.0);
    let value = |v: &JsValue| Reflect::get(v, &JsValue::from_str("value")).unwrap();
    let (a, b) = (value(&a).as_f64().unwrap() as u32, value(&b).as_f64().unwrap() as u32);
    let e = g.add_edge_res(a, b);
    let e = value(&e).as_f64().unwrap() as u32;
    assert_eq!(value(&g.cycle_direction_res(e)).as_f64(), Some(1.0));
    assert_eq!(value(&g.cycle_direction_res(e)).as_f64(), Some(2.0));
    assert_eq!(value(&g.remove_node_res(b)).as_bool(), Some(true));
    assert_eq!(g.edge_count(), 0);
}
