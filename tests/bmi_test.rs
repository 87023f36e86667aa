use diet_planner::domain::model::{Bmi, BmiCategory, ProfileForm};

fn bmi_for(height_cm: f64, weight_kg: f64) -> Bmi {
    Bmi::compute(height_cm, weight_kg).unwrap()
}

#[test]
fn test_boundary_values() {
    // height 100cm makes BMI equal to the weight
    let cases = [
        (18.49, BmiCategory::Underweight),
        (18.5, BmiCategory::NormalWeight),
        (24.99, BmiCategory::NormalWeight),
        (25.0, BmiCategory::Overweight),
        (29.99, BmiCategory::Overweight),
        (30.0, BmiCategory::Obese),
    ];

    for (weight, expected) in cases {
        let bmi = bmi_for(100.0, weight);
        assert_eq!(bmi.value, weight);
        assert_eq!(bmi.category, expected, "BMI {}", weight);
    }
}

#[test]
fn test_typical_adults() {
    assert_eq!(bmi_for(170.0, 50.0).category, BmiCategory::Underweight);
    assert_eq!(bmi_for(170.0, 65.0).category, BmiCategory::NormalWeight);
    assert_eq!(bmi_for(170.0, 80.0).category, BmiCategory::Overweight);
    assert_eq!(bmi_for(170.0, 100.0).category, BmiCategory::Obese);
    assert_eq!(bmi_for(170.0, 100.0).value, 34.6);
}

#[test]
fn test_category_labels() {
    let labels: Vec<&str> = BmiCategory::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(labels, ["Underweight", "Normal weight", "Overweight", "Obese"]);
}

#[test]
fn test_form_to_bmi() {
    let form = ProfileForm {
        age: Some("45".to_string()),
        gender: Some("Female".to_string()),
        height: Some("158.5".to_string()),
        weight: Some("62.8".to_string()),
        diet: Some("Vegetarian".to_string()),
        exercise: Some("Cardio".to_string()),
    };

    let input = form.parse().unwrap();
    let bmi = Bmi::compute(input.height_cm, input.weight_kg).unwrap();
    assert_eq!(bmi.value, 25.0);
    assert_eq!(bmi.category, BmiCategory::Overweight);
}

#[test]
fn test_empty_form_is_rejected() {
    assert!(ProfileForm::default().parse().is_err());
}
