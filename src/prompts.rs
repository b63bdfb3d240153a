// src/prompts.rs
use crate::error::AppError;
use crate::services::provider::ImageData;

/// The four planner sections a user can pick from. Each maps to one fixed
/// instruction template, so templates can be tested and changed without
/// touching the dispatch logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    LocationFinder,
    TripPlanner,
    WeatherForecast,
    HotelFinder,
}

const LOCATION_FINDER_PROMPT: &str = "\
You are an expert tourist guide. Your job is to provide a summary about the place and:
- Location of the place
- State & Capital
- Coordinates of the place
- Some popular places nearby

Return the response using markdown.";

const TRIP_PLANNER_PROMPT: &str = "\
You are an expert tour planner. Your job is to provide recommendations and a plan \
for a given location for any number of days.
Also suggest hidden secrets, hotels, and beautiful places we shouldn't forget to visit.
Also, tell the best month to visit the given place.

Return the response using markdown.";

const WEATHER_FORECAST_PROMPT: &str = "\
You are an expert weather forecaster. Your job is to provide a forecast for a given \
place for the next 7 days from the current date.
- Provide Precipitation
- Provide Humidity
- Provide Wind
- Provide Air Quality
- Provide Cloud Cover

Return the response using markdown.";

const HOTEL_FINDER_PROMPT: &str = "\
You are an expert restaurant & hotel planner.
Your job is to provide restaurant & hotel options for a given place that are neither \
too expensive nor too cheap.
- Provide rating of the restaurant/hotel
- Top 5 restaurants with address and average cost per cuisine
- Top 5 hotels with address and average cost per night

Return the response using markdown.";

impl Section {
    pub fn template(&self) -> &'static str {
        match self {
            Section::LocationFinder => LOCATION_FINDER_PROMPT,
            Section::TripPlanner => TRIP_PLANNER_PROMPT,
            Section::WeatherForecast => WEATHER_FORECAST_PROMPT,
            Section::HotelFinder => HOTEL_FINDER_PROMPT,
        }
    }
}

#[derive(Debug)]
pub enum UserInput {
    Text(String),
    Image(ImageData),
}

/// One instruction template bundled with the user's input. Built per request
/// and handed straight to the provider; nothing outlives the response.
#[derive(Debug)]
pub struct GenerationRequest {
    pub section: Section,
    pub input: UserInput,
}

impl GenerationRequest {
    /// Text-mode request. Rejects empty or whitespace-only input before
    /// anything goes out on the wire.
    pub fn text(section: Section, input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AppError::BadRequest("input cannot be empty".to_string()));
        }
        Ok(Self {
            section,
            input: UserInput::Text(trimmed.to_string()),
        })
    }

    /// Image-mode request. The upload only has to exist; bytes are forwarded
    /// as-is with their declared MIME type.
    pub fn image(section: Section, image: Option<ImageData>) -> Result<Self, AppError> {
        match image {
            Some(image) => Ok(Self {
                section,
                input: UserInput::Image(image),
            }),
            None => Err(AppError::MissingFile),
        }
    }
}
