//! Calculator page: protocol form, verdict, regulation matrix and summary.

use axum::{extract::State, response::Html};

use pigweb_common::protocol::{severity_label, AnimalNumbers, ResearchGoal, Species, SuccessRate};
use pigweb_scoring::balance::{DEFAULT_SLIDER, SCENARIOS};

use crate::state::SharedState;

pub async fn calculator_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_calculator_page(
        &state.config.report.title,
        state.gene_lookup.is_some(),
    ))
}

fn options<T: Copy>(items: &[T], value: fn(&T) -> &'static str, label: fn(&T) -> &'static str) -> String {
    items
        .iter()
        .map(|item| format!(r#"<option value="{}">{}</option>"#, value(item), label(item)))
        .collect()
}

fn render_calculator_page(title: &str, gene_lookup_enabled: bool) -> String {
    let goals = options(&ResearchGoal::ALL, ResearchGoal::as_str, ResearchGoal::label);
    let species = options(&Species::ALL, Species::as_str, Species::label);
    let numbers = options(&AnimalNumbers::ALL, AnimalNumbers::as_str, AnimalNumbers::label);
    let success = options(&SuccessRate::ALL, SuccessRate::as_str, SuccessRate::label);
    let severities: String = (0..=3)
        .map(|s| {
            let selected = if s == 1 { " selected" } else { "" };
            format!(r#"<option value="{s}"{selected}>{}</option>"#, severity_label(s))
        })
        .collect();
    let scenarios: String = SCENARIOS
        .iter()
        .map(|s| format!(r#"<option value="{0}">{0}</option>"#, s.key))
        .collect();
    let gene_panel = if gene_lookup_enabled {
        r#"<section class="card">
            <h2>Pig gene lookup (NCBI)</h2>
            <input id="geneSearch" placeholder="e.g. MSTN"> <button id="gene-btn" type="button">Search</button>
            <div id="ncbiResult"></div>
        </section>"#
    } else {
        ""
    };

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body{{font-family:Arial,sans-serif;max-width:960px;margin:0 auto;padding:24px;color:#222;}}
  .card{{border:1px solid #ddd;border-radius:8px;padding:16px;margin:16px 0;}}
  label{{display:block;margin:8px 0 2px;font-weight:600;}}
  .result-box.approved{{border-left:6px solid #0d8030;}}
  .result-box.borderline{{border-left:6px solid #d81b60;}}
  .result-box.denied{{border-left:6px solid #c62828;}}
  pre{{background:#f8f8f8;padding:16px;white-space:pre-wrap;}}
  td{{padding:4px 8px;border-bottom:1px solid #eee;}}
</style>
</head>
<body>
<h1>{title}</h1>
<form id="protocol" class="card">
  <label for="goal">Research objective</label><select id="goal" name="goal">{goals}</select>
  <label for="procedure">Procedure</label>
  <select id="procedure" name="procedure"><option value="other">Other</option><option value="surgery">Surgery</option><option value="xenotransplantation">Xenotransplantation</option></select>
  <label for="species">Species</label><select id="species" name="species">{species}</select>
  <label for="numbers">Number of animals</label><select id="numbers" name="numbers">{numbers}</select>
  <label for="suffering">Severity</label><select id="suffering" name="severity">{severities}</select>
  <label for="success_rate">Scientific confidence</label><select id="success_rate" name="success_rate">{success}</select>
  <label for="alternatives">Validated non-animal alternatives exist?</label>
  <select id="alternatives" name="alternatives"><option value="">—</option><option value="no">No</option><option value="yes">Yes</option></select>
  <label><input type="checkbox" id="xeno_flag"> Xenotransplantation / GMO</label>
  <p><button type="submit">Calculate</button> <button type="reset">Reset</button></p>
</form>
<section class="card">
  <label for="scenario">Research scenario preset</label>
  <select id="scenario"><option value="">—</option>{scenarios}</select>
  <label for="money">Research cost</label><input type="range" id="money" min="0" max="100" value="{DEFAULT_SLIDER}">
  <p id="balance-result"></p>
</section>
<section id="result" class="card result-box" hidden>
  <h2 id="verdictTitle"></h2><p id="verdictText"></p>
  <table><tbody id="reg-matrix-body"></tbody></table>
  <pre id="summary-box"></pre>
  <button id="download-summary" type="button" disabled>Download PDF Summary</button>
</section>
{gene_panel}
<script>
const $ = (id) => document.getElementById(id);
let lastDraft = null;
function draft() {{
  const alt = $('alternatives').value;
  return {{
    goal: $('goal').value || null,
    procedure: $('procedure').value,
    species: $('species').value,
    numbers: $('numbers').value,
    severity: parseInt($('suffering').value, 10),
    success_rate: $('success_rate').value,
    alternatives_exist: alt === '' ? null : alt === 'yes',
    xeno_flag: $('xeno_flag').checked,
    money: parseFloat($('money').value)
  }};
}}
$('protocol').addEventListener('submit', async (ev) => {{
  ev.preventDefault();
  lastDraft = draft();
  const res = await fetch('/api/evaluate', {{ method: 'POST', headers: {{ 'Content-Type': 'application/json' }}, body: JSON.stringify(lastDraft) }});
  const body = await res.json();
  const box = $('result');
  box.hidden = false;
  if (!res.ok) {{ box.className = 'card result-box denied'; $('verdictTitle').textContent = 'Error'; $('verdictText').textContent = body.error; return; }}
  box.className = 'card result-box ' + body.verdict.css_class;
  $('verdictTitle').textContent = body.verdict.title;
  $('verdictText').textContent = body.verdict.message;
  $('reg-matrix-body').innerHTML = '';
  body.matrix.forEach(r => {{
    const tr = document.createElement('tr');
    [r.rule, r.icon, r.note].forEach((t, i) => {{ const td = document.createElement('td'); td.textContent = t; if (i === 1) td.style.color = r.colour; tr.appendChild(td); }});
    $('reg-matrix-body').appendChild(tr);
  }});
  $('summary-box').textContent = body.summary;
  $('balance-result').textContent = body.balance.verdict.replace(/_/g, ' ');
  $('download-summary').disabled = false;
}});
$('download-summary').addEventListener('click', async () => {{
  if (!lastDraft) return;
  const res = await fetch('/api/report', {{ method: 'POST', headers: {{ 'Content-Type': 'application/json' }}, body: JSON.stringify(lastDraft) }});
  const win = window.open('', '_blank');
  if (!win) {{ alert('Allow pop-ups to download PDF'); return; }}
  win.document.write(await res.text());
  win.document.close();
  win.focus();
  setTimeout(() => win.print(), 800);
}});
$('scenario').addEventListener('change', async (ev) => {{
  if (!ev.target.value) return;
  const res = await fetch('/api/scenarios/' + encodeURIComponent(ev.target.value));
  if (res.ok) {{ const body = await res.json(); $('money').value = body.preset.money; $('balance-result').textContent = body.message; }}
}});
const geneBtn = $('gene-btn');
if (geneBtn) geneBtn.addEventListener('click', async () => {{
  const symbol = $('geneSearch').value.trim();
  if (!symbol) return;
  $('ncbiResult').textContent = 'Searching NCBI Pig Database...';
  const res = await fetch('/api/genes/' + encodeURIComponent(symbol));
  const body = await res.json();
  $('ncbiResult').textContent = res.ok
    ? `${{body.name}} (ID: ${{body.id}}): ${{body.description}}, ${{body.organism}}, chromosome ${{body.chromosome || '?'}}`
    : 'Error: ' + body.error;
}});
</script>
</body>
</html>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_lists_every_species_and_scenario() {
        let html = render_calculator_page("PigWeb", true);
        for s in Species::ALL {
            assert!(html.contains(&format!(r#"value="{}""#, s.as_str())));
        }
        assert!(html.contains(r#"<option value="gene-therapy">"#));
        assert!(html.contains(r#"<option value="1" selected>Mild</option>"#));
        assert!(html.contains("geneSearch"));
        assert!(html.contains(r#"id="money" min="0" max="100" value="50""#));
    }

    #[test]
    fn test_gene_panel_hidden_when_disabled() {
        let html = render_calculator_page("PigWeb", false);
        assert!(!html.contains("id=\"geneSearch\""));
    }
}
