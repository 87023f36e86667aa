//! HTML page for the planner form and its results.

use crate::domain::model::{DailyPlan, DietPreference, ExercisePreference, Gender, PlanResult};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; color: #222; }
h1 { font-size: 1.6rem; }
form { display: grid; grid-template-columns: 10rem 1fr; gap: .6rem 1rem; align-items: center; }
form button { grid-column: 2; justify-self: start; padding: .4rem 1.2rem; }
input, select { padding: .3rem; }
section.results { margin-top: 2rem; }
table { border-collapse: collapse; width: 100%; margin-bottom: 1.5rem; }
th, td { border: 1px solid #ccc; padding: .45rem .6rem; text-align: left; vertical-align: top; }
th { background: #f3f3f3; }
ul { margin: 0; padding-left: 1.2rem; }
.muted { color: #777; font-size: .85rem; }
"#;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the page; `result` pre-fills the form and adds the plan tables.
pub fn index_page(result: Option<&PlanResult>) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Diet &amp; Workout Planner</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n<h1>Diet &amp; Workout Planner</h1>\n");

    html.push_str(&profile_form(result));

    if let Some(result) = result {
        html.push_str(&results_section(result));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn profile_form(result: Option<&PlanResult>) -> String {
    let input = result.map(|r| &r.input);
    let age = input.map(|i| i.age.to_string()).unwrap_or_default();
    let height = input.map(|i| i.height_cm.to_string()).unwrap_or_default();
    let weight = input.map(|i| i.weight_kg.to_string()).unwrap_or_default();

    let gender_options = options(
        Gender::OPTIONS.map(|g| g.as_str()),
        input.map(|i| i.gender.as_str()),
    );
    let diet_options = options(
        DietPreference::ALL.map(|d| d.as_str()),
        input.map(|i| i.diet.as_str()),
    );
    let exercise_options = options(
        ExercisePreference::ALL.map(|e| e.as_str()),
        input.map(|i| i.exercise.as_str()),
    );

    format!(
        r#"<form method="post" action="/">
<label for="age">Age</label>
<input type="number" id="age" name="age" min="1" step="1" required value="{age}">
<label for="gender">Gender</label>
<select id="gender" name="gender" required>
{gender_options}</select>
<label for="height">Height (cm)</label>
<input type="number" id="height" name="height" min="1" step="any" required value="{height}">
<label for="weight">Weight (kg)</label>
<input type="number" id="weight" name="weight" min="1" step="any" required value="{weight}">
<label for="diet">Diet preference</label>
<select id="diet" name="diet" required>
{diet_options}</select>
<label for="exercise">Exercise preference</label>
<select id="exercise" name="exercise" required>
{exercise_options}</select>
<button type="submit">Get my plan</button>
</form>
"#,
        age = escape_html(&age),
        height = escape_html(&height),
        weight = escape_html(&weight),
    )
}

fn options<const N: usize>(values: [&str; N], selected: Option<&str>) -> String {
    values
        .iter()
        .map(|value| {
            let marker = if Some(*value) == selected { " selected" } else { "" };
            format!(
                "<option value=\"{v}\"{marker}>{v}</option>\n",
                v = escape_html(value),
            )
        })
        .collect()
}

fn results_section(result: &PlanResult) -> String {
    format!(
        r#"<section class="results">
<h2>Your results</h2>
<p><strong>Predicted category:</strong> {prediction}</p>
<p><strong>BMI:</strong> {bmi:.2} ({category})</p>
<h3>Diet plan ({diet})</h3>
{diet_table}<h3>Workout plan ({exercise})</h3>
{workout_table}<p class="muted">Generated {generated}</p>
</section>
"#,
        prediction = escape_html(&result.prediction),
        bmi = result.bmi.value,
        category = result.bmi.category,
        diet = escape_html(result.input.diet.as_str()),
        diet_table = plan_table(&result.diet_plan),
        exercise = escape_html(result.input.exercise.as_str()),
        workout_table = plan_table(&result.workout_plan),
        generated = result.generated_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

fn plan_table(plan: &DailyPlan) -> String {
    let mut table = String::from("<table>\n<tr><th>Time of day</th><th>Plan</th></tr>\n");

    if plan.is_empty() {
        table.push_str("<tr><td colspan=\"2\">No plan available</td></tr>\n");
    } else {
        for (slot, items) in plan.slots() {
            let list: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", escape_html(item)))
                .collect();
            table.push_str(&format!("<tr><td>{}</td><td><ul>{}</ul></td></tr>\n", slot, list));
        }
    }

    table.push_str("</table>\n");
    table
}
