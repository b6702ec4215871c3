//! Embedded HTML for the form and result pages.

const CSS: &str = r#"<style>
    body {
        font-family: Arial, sans-serif;
        margin: 0;
        padding: 0;
        display: flex;
        justify-content: center;
        align-items: center;
        height: 100vh;
        color: #333;
    }
    .container {
        max-width: 600px;
        margin: 50px auto;
        padding: 20px;
        background-color: #99ccff;
        box-shadow: 0px 0px 10px rgba(0, 0, 0, 0.1);
    }
    h1 {
        text-align: center;
        color: #343a40;
    }
    label {
        display: block;
        margin-bottom: 10px;
        color: #495057;
    }
    input[type="number"], select {
        width: 100%;
        padding: 10px;
        margin-bottom: 20px;
        border: 1px solid #ced4da;
        border-radius: 5px;
    }
    input[type="submit"] {
        background-color: #007bff;
        color: white;
        padding: 10px 15px;
        border: none;
        border-radius: 5px;
        cursor: pointer;
        width: 100%;
    }
    input[type="submit"]:hover {
        background-color: #0056b3;
    }
</style>"#;

pub fn form_page() -> String {
    format!(
        r#"{CSS}
<div class="container">
    <h1>Student Performance Predictor</h1>
    <form action="/predict" method="POST">
        <label for="hours_studied">Hours Studied (max 24 hours):</label>
        <input type="number" name="hours_studied" max="24" required>

        <label for="previous_scores">Previous Scores (max 100):</label>
        <input type="number" name="previous_scores" max="100" required>

        <label for="extracurricular_activities">Extracurricular Activities:</label>
        <select name="extracurricular_activities" required>
            <option value="Yes">Yes</option>
            <option value="No">No</option>
        </select>

        <label for="sleep_hours">Sleep Hours:</label>
        <input type="number" name="sleep_hours" required>

        <label for="sample_question_papers">Sample Question Papers Practiced:</label>
        <input type="number" name="sample_question_papers" required>

        <input type="submit" value="Predict">
    </form>
</div>
"#
    )
}

pub fn result_page(prediction: f32) -> String {
    format!(
        r#"{CSS}
<div class="container">
    <h1>Prediction Result</h1>
    <p>Predicted Performance Index: <strong>{prediction:.2}</strong></p>
    <a href="/">Go back</a>
</div>
"#
    )
}
