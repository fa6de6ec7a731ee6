//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js drawing functions live in `assets/js/*.js` and are embedded at
//! compile time. They are evaluated as globals (no ES modules) and exposed
//! via `window.*`. All classification and coordination happens on the Rust
//! side; these wrappers only serialize payloads and invoke the globals.

// Embed all D3 chart JS files at compile time
static CHOROPLETH_JS: &str = include_str!("../assets/js/choropleth.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static INFO_LABEL_JS: &str = include_str!("../assets/js/info-label.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('UHI JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files use `function` declarations. To make them globally
/// accessible (not block-scoped inside the setInterval callback), they are
/// evaluated at global scope via indirect eval once D3 and topojson-client
/// have loaded, then each function is promoted to `window.*`.
pub fn init_charts() {
    let all_js = [CHOROPLETH_JS, BAR_CHART_JS, INFO_LABEL_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope.
    let store_js = format!(
        "window.__uhiChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof topojson !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__uhiChartScripts);
                    delete window.__uhiChartScripts;
                    if (typeof renderChoropleth !== 'undefined') window.renderChoropleth = renderChoropleth;
                    if (typeof recolorChoropleth !== 'undefined') window.recolorChoropleth = recolorChoropleth;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof updateBarChart !== 'undefined') window.updateBarChart = updateBarChart;
                    if (typeof setHighlight !== 'undefined') window.setHighlight = setHighlight;
                    if (typeof clearHighlight !== 'undefined') window.clearHighlight = clearHighlight;
                    if (typeof showInfoLabel !== 'undefined') window.showInfoLabel = showInfoLabel;
                    if (typeof hideInfoLabel !== 'undefined') window.hideInfoLabel = hideInfoLabel;
                    if (typeof moveInfoLabel !== 'undefined') window.moveInfoLabel = moveInfoLabel;
                    window.__uhiChartsReady = true;
                    console.log('UHI charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

fn escape(payload: &str) -> String {
    payload.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Render the choropleth map into a container div.
///
/// Uses a polling loop to wait for D3, the chart scripts, and the
/// container DOM element before drawing.
pub fn render_choropleth(container_id: &str, topology: &str, fills_json: &str, config_json: &str) {
    let escaped_topology = escape(topology);
    let escaped_fills = escape(fills_json);
    let escaped_config = escape(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__uhiChartsReady &&
                    typeof window.renderChoropleth !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderChoropleth('{container_id}', '{escaped_topology}', '{escaped_fills}', '{escaped_config}');
                    }} catch(e) {{ console.error('[UHI] renderChoropleth error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Restyle existing map shapes for a new scale. No polling: by the time a
/// recolor can happen, the map exists.
pub fn recolor_choropleth(container_id: &str, fills_json: &str, config_json: &str) {
    let escaped_fills = escape(fills_json);
    let escaped_config = escape(config_json);
    call_js(&format!(
        "window.recolorChoropleth && window.recolorChoropleth('{container_id}', '{escaped_fills}', '{escaped_config}');",
    ));
}

/// Render the ranked bar chart into a container div.
///
/// Uses a polling loop to wait for D3, the chart scripts, and the
/// container DOM element before drawing.
pub fn render_bar_chart(container_id: &str, bars_json: &str, config_json: &str) {
    let escaped_bars = escape(bars_json);
    let escaped_config = escape(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__uhiChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderBarChart('{container_id}', '{escaped_bars}', '{escaped_config}');
                    }} catch(e) {{ console.error('[UHI] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Re-sort, re-size, and re-color existing bars.
pub fn update_bar_chart(container_id: &str, bars_json: &str, config_json: &str) {
    let escaped_bars = escape(bars_json);
    let escaped_config = escape(config_json);
    call_js(&format!(
        "window.updateBarChart && window.updateBarChart('{container_id}', '{escaped_bars}', '{escaped_config}');",
    ));
}

pub fn set_highlight(code: &str) {
    call_js(&format!(
        "window.setHighlight && window.setHighlight('{}');",
        escape(code)
    ));
}

pub fn clear_highlight(code: &str) {
    call_js(&format!(
        "window.clearHighlight && window.clearHighlight('{}');",
        escape(code)
    ));
}

pub fn show_info_label(code: &str, name: &str, value_text: &str) {
    call_js(&format!(
        "window.showInfoLabel && window.showInfoLabel('{}', '{}', '{}');",
        escape(code),
        escape(name),
        escape(value_text)
    ));
}

pub fn hide_info_label() {
    call_js("window.hideInfoLabel && window.hideInfoLabel();");
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
