//! Dashboard handler — the launch-records page with both charts.

use axum::extract::State;
use axum::response::Html;

use crate::state::SharedState;

/// GET / — the dashboard page. The two inputs (site dropdown, payload
/// range slider) re-fetch their chart specs from the API on every
/// change; no selection state lives on the server.
pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    let site_options: String = state
        .table
        .all_sites()
        .iter()
        .map(|site| format!(r#"<option value="{site}">{site}</option>"#))
        .collect();

    let (min_payload, max_payload) = state.table.payload_extent();

    Html(render_dashboard(&site_options, min_payload, max_payload))
}

fn render_dashboard(site_options: &str, min_payload: f64, max_payload: f64) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Launch Records Dashboard — Launchboard</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
        :root {{ --bg: #10141c; --card: #1a2030; --border: rgba(255,255,255,0.08); --text: #e5e7eb; --muted: #9ca3af; --accent: #60a5fa; }}
        * {{ box-sizing: border-box; }}
        body {{ margin: 0; background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }}
        .container {{ max-width: 1100px; margin: 0 auto; padding: 2rem 1.5rem; }}
        h1 {{ text-align: center; font-size: 2rem; margin-bottom: 0.25rem; }}
        .subtitle {{ text-align: center; color: var(--muted); margin-bottom: 2rem; }}
        .card {{ background: var(--card); border: 1px solid var(--border); border-radius: 10px; padding: 1.25rem; margin-bottom: 1.5rem; }}
        .card-header {{ font-weight: 600; margin-bottom: 1rem; color: var(--accent); }}
        label {{ color: var(--muted); font-size: 0.9rem; display: block; margin-bottom: 0.4rem; }}
        select {{ width: 100%; padding: 0.5rem; border-radius: 6px; border: 1px solid var(--border); background: var(--bg); color: var(--text); }}
        .range-row {{ display: flex; gap: 1rem; align-items: center; }}
        .range-row input {{ flex: 1; }}
        .range-value {{ min-width: 5.5rem; text-align: right; font-variant-numeric: tabular-nums; color: var(--muted); }}
        canvas {{ max-height: 360px; }}
    </style>
</head>
<body>
<div class="container">
    <h1>Launch Records Dashboard</h1>
    <p class="subtitle">Success rates and payload correlation across launch sites</p>

    <div class="card">
        <label for="siteSelect">Launch site</label>
        <select id="siteSelect">
            <option value="ALL" selected>All Sites</option>
            {site_options}
        </select>
    </div>

    <div class="card">
        <div class="card-header" id="pieTitle">Launch outcomes</div>
        <canvas id="pieChart"></canvas>
    </div>

    <div class="card">
        <label>Payload range (kg)</label>
        <div class="range-row">
            <span class="range-value" id="minLabel">{min_payload:.0}</span>
            <input type="range" id="minPayload" min="0" max="10000" step="100" value="{min_payload:.0}">
            <input type="range" id="maxPayload" min="0" max="10000" step="100" value="{max_payload:.0}">
            <span class="range-value" id="maxLabel">{max_payload:.0}</span>
        </div>
    </div>

    <div class="card">
        <div class="card-header" id="scatterTitle">Payload vs. outcome</div>
        <canvas id="scatterChart"></canvas>
    </div>
</div>

<script>
    Chart.defaults.color = '#9ca3af';
    Chart.defaults.borderColor = 'rgba(255,255,255,0.08)';

    const palette = ['#60a5fa', '#f87171', '#34d399', '#fbbf24', '#a78bfa', '#f472b6'];
    let pieChart = null;
    let scatterChart = null;

    function currentSelection() {{
        const site = document.getElementById('siteSelect').value;
        let min = Number(document.getElementById('minPayload').value);
        let max = Number(document.getElementById('maxPayload').value);
        if (min > max) [min, max] = [max, min];
        document.getElementById('minLabel').textContent = min;
        document.getElementById('maxLabel').textContent = max;
        return {{ site, min, max }};
    }}

    function renderPie(spec) {{
        document.getElementById('pieTitle').textContent = spec.title;
        const labels = spec.rows.map(r => String(r[spec.encoding.names]));
        const values = spec.rows.map(r => r[spec.encoding.values]);
        if (pieChart) pieChart.destroy();
        pieChart = new Chart(document.getElementById('pieChart'), {{
            type: 'pie',
            data: {{
                labels,
                datasets: [{{ data: values, backgroundColor: palette, borderWidth: 0 }}]
            }},
            options: {{ responsive: true, maintainAspectRatio: false }}
        }});
    }}

    function renderScatter(spec) {{
        document.getElementById('scatterTitle').textContent = spec.title;
        const groups = {{}};
        for (const row of spec.rows) {{
            const key = String(row[spec.encoding.color]);
            (groups[key] = groups[key] || []).push({{
                x: row[spec.encoding.x],
                y: row[spec.encoding.y]
            }});
        }}
        const datasets = Object.keys(groups).map((label, i) => ({{
            label,
            data: groups[label],
            backgroundColor: palette[i % palette.length]
        }}));
        if (scatterChart) scatterChart.destroy();
        scatterChart = new Chart(document.getElementById('scatterChart'), {{
            type: 'scatter',
            data: {{ datasets }},
            options: {{
                responsive: true,
                maintainAspectRatio: false,
                scales: {{
                    x: {{ title: {{ display: true, text: 'Payload mass (kg)' }} }},
                    y: {{ min: -0.1, max: 1.1, ticks: {{ stepSize: 1 }},
                          title: {{ display: true, text: 'Outcome' }} }}
                }}
            }}
        }});
    }}

    async function refresh() {{
        const sel = currentSelection();
        const site = encodeURIComponent(sel.site);

        const pie = await fetch(`/api/charts/outcome?site=${{site}}`);
        if (pie.ok) renderPie(await pie.json());

        const scatter = await fetch(
            `/api/charts/payload?site=${{site}}&min_kg=${{sel.min}}&max_kg=${{sel.max}}`);
        if (scatter.ok) renderScatter(await scatter.json());
    }}

    document.getElementById('siteSelect').addEventListener('change', refresh);
    document.getElementById('minPayload').addEventListener('change', refresh);
    document.getElementById('maxPayload').addEventListener('change', refresh);
    refresh();
</script>
</body>
</html>"##
    )
}
