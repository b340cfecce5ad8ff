//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The vega-embed rendering library is loaded by the hosting page from a CDN
//! script tag. The glue in `assets/js/vega-chart.js` is embedded at compile
//! time, evaluated as globals (no ES modules), and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize chart specs and
//! call those globals.

// Embed the vega-embed glue at compile time
static VEGA_CHART_JS: &str = include_str!("../assets/js/vega-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('ASIT JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart glue with a wait-for-vegaEmbed polling loop.
///
/// The glue defines `renderVegaChart(...)` via `function` declarations. To
/// ensure they become globally accessible (not block-scoped inside the
/// setInterval callback), they are evaluated at global scope via indirect
/// `eval()` once vegaEmbed is ready, and then explicitly promoted to
/// `window.*`. Safe to call more than once; later calls are no-ops.
pub fn init_charts() {
    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "if (!window.__asitChartsInit) window.__asitChartScripts = {};",
        serde_json::to_string(VEGA_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__asitChartsInit) { return; }
            window.__asitChartsInit = true;
            var waitForVega = setInterval(function() {
                if (typeof vegaEmbed !== 'undefined') {
                    clearInterval(waitForVega);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__asitChartScripts);
                    delete window.__asitChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderVegaChart !== 'undefined') window.renderVegaChart = renderVegaChart;
                    if (typeof destroyVegaChart !== 'undefined') window.destroyVegaChart = destroyVegaChart;
                    window.__asitChartsReady = true;
                    console.log('ASIT charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a Vega-Lite spec with vega-embed into the given container.
///
/// Uses a polling loop to wait for vegaEmbed to load, the glue to
/// initialize, and the container DOM element to exist before rendering.
///
/// `spec_json` and `options_json` must be serialized JSON documents; any
/// newlines in embedded data are already escape sequences in them, so only
/// backslashes and quotes need escaping for the single-quoted JS literal.
pub fn render_vega_chart(container_id: &str, spec_json: &str, options_json: &str) {
    let escaped_spec = spec_json.replace('\\', "\\\\").replace('\'', "\\'");
    let escaped_options = options_json.replace('\\', "\\\\").replace('\'', "\\'");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__asitChartsReady &&
                    typeof window.renderVegaChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderVegaChart('{container_id}', '{escaped_spec}', '{escaped_options}');
                    }} catch(e) {{ console.error('[ASIT] renderVegaChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
