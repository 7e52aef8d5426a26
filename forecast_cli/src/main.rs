//! # Gridcast CLI
//!
//! Runs one material forecast from the terminal without starting the HTTP
//! server. Prompts for a budget and estimates the reference project
//! (Maharashtra, 400kV towers, GIS substation, plain terrain, 18% tax).

use std::io::{self, BufRead, Write};

use forecast_core::estimate::{PredictionResponse, ProjectRequest};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn sample_request(budget: f64) -> ProjectRequest {
    ProjectRequest {
        budget,
        location: "Maharashtra".to_string(),
        tower_type: "400kV".to_string(),
        substation_type: "GIS".to_string(),
        terrain: "Plain".to_string(),
        tax: 18.0,
    }
}

fn main() {
    println!("Gridcast CLI - Material Forecast");
    println!("================================");
    println!();

    let budget = prompt_f64("Enter project budget (Cr) [12.0]: ", 12.0);
    let request = sample_request(budget);
    let project = request.resolve();
    let result = request.estimate();

    println!();
    println!("═══════════════════════════════════════");
    println!("  MATERIAL FORECAST");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Budget:     {:.2} Cr", project.budget);
    println!("  Location:   {}", project.location);
    println!("  Tower:      {}", project.tower_type);
    println!("  Substation: {}", project.substation_type);
    println!("  Terrain:    {}", project.terrain);
    println!("  Tax:        {:.1}%", project.tax);
    println!();
    println!("Estimate:");
    println!("  Steel:      {:>12.2} tons", result.steel_tons());
    println!("  Cement:     {:>12.2} tons", result.cement_tons());
    println!("  Insulators: {:>12.2} units", result.insulator_units());

    if result.is_zero() {
        println!();
        println!("  [WARN] Estimation failed for this budget; showing zero estimate.");
    }

    println!();
    println!("JSON Output (API response body):");
    if let Ok(json) = serde_json::to_string_pretty(&PredictionResponse::from(result)) {
        println!("{}", json);
    }
}
