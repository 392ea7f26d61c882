// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a sample recipe dataset, planner resources, and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `food_planner`

use std::env;
use std::io::Write;
use std::sync::{Arc, Once};

use food_planner::config::PlannerConfig;
use food_planner::intelligence::recipes::models::{RecipeRecord, TimeField};
use food_planner::mcp::PlannerResources;
use food_planner::tools::ToolExecutionContext;
use tempfile::NamedTempFile;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Header row shared by every fixture dataset
pub const DATASET_HEADER: &str = "recipe_name,prep_time,cook_time,total_time,servings,ingredients,directions,rating,url,cuisine_path,nutrition,timing";

/// Five recipes covering the diet, time, type, nutrient, and rating stages
pub const SAMPLE_DATASET: &str = r#"recipe_name,prep_time,cook_time,total_time,servings,ingredients,directions,rating,url,cuisine_path,nutrition,timing
Quick Garden Salad,10 mins,,10 mins,2,"[""2 cups romaine lettuce"", ""1 tomato"", ""1 tbsp olive oil"", ""salt to taste""]","[""Chop."", ""Toss.""]",4.2,https://example.com/salad,/Salad/Green Salads/,"Calories: 120, Total Fat 9g, Sodium 150mg, Protein 2g",
Beef Stew,20 mins,25 mins,45 mins,4,"[""1 lb beef chuck"", ""2 carrots"", ""1 tsp salt""]","[""Brown the beef."", ""Simmer.""]",4.8,https://example.com/stew,/Soups/Stews/,"Calories: 450, Total Fat 20g, Sodium 900mg, Protein 35g",
Lentil Soup,10 mins,20 mins,30 mins,4,"[""1 cup lentils"", ""1 onion"", ""2 tbsp butter"", ""1/2 tsp salt""]","[""Simmer everything.""]",4.6,https://example.com/lentil,/Soups/Lentil/,"Calories: 300, Total Fat 8g, Sodium 400mg, Protein 18g",
Buttered Toast,5 mins,,5 mins,1,"[""1 slice bread"", ""1 tbsp butter""]","[""Toast."", ""Butter.""]",2.9,https://example.com/toast,/Breakfast and Brunch/,"Calories: 150, Total Fat 7g, Sodium 200mg, Protein 3g",
Peanut Noodles,15 mins,10 mins,25 mins,2,"[""8 oz noodles"", ""3 tbsp peanut butter"", ""1 tbsp soy sauce""]","[""Boil."", ""Toss.""]",4.4,https://example.com/noodles,/Main Dishes/Noodles/,"Calories: 600, Total Fat 25g, Sodium 1200mg, Protein 20g",
"#;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Write CSV text to a temporary file that lives as long as the handle
pub fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Planner resources reading the given dataset file
pub fn resources_for(dataset: &NamedTempFile) -> Arc<PlannerResources> {
    Arc::new(PlannerResources::from_config(
        PlannerConfig::default().with_dataset_path(dataset.path()),
    ))
}

/// Planner resources pointing at a dataset that does not exist
pub fn resources_without_dataset() -> Arc<PlannerResources> {
    Arc::new(PlannerResources::from_config(
        PlannerConfig::default().with_dataset_path("/nonexistent/recipe_dataset.csv"),
    ))
}

/// Fresh execution context over the given resources
pub fn context_for(resources: &Arc<PlannerResources>) -> ToolExecutionContext {
    ToolExecutionContext::new(Arc::clone(resources))
}

/// Minimal record with a total time, rating, and ingredient lines
pub fn recipe(name: &str, minutes: i64, rating: f64, ingredients: &[&str]) -> RecipeRecord {
    let mut record = RecipeRecord::new(name, 2);
    record.total_time = Some(TimeField::Minutes(minutes));
    record.rating = rating;
    record.ingredients = ingredients.iter().map(|s| (*s).to_owned()).collect();
    record
}
