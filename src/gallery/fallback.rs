use chrono::{DateTime, Utc};

use crate::entities::project::Project;

/// The demo dataset shown when the API is unreachable. IDs and timestamps are
/// fixed literals; these records are display-only and never sent anywhere.
pub fn demo_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "E-Commerce Platform".to_string(),
            description: "Full-stack e-commerce solution with React frontend and .NET backend"
                .to_string(),
            image_url: Some("https://via.placeholder.com/400x250".to_string()),
            demo_url: Some("https://demo.example.com".to_string()),
            source_url: Some("https://github.com/example/ecommerce".to_string()),
            technologies: "React,ASP.NET Core,Entity Framework,SQL Server".to_string(),
            created_at: demo_timestamp("2024-01-15T00:00:00Z"),
            updated_at: demo_timestamp("2024-01-15T00:00:00Z"),
            is_active: true,
        },
        Project {
            id: 2,
            title: "Task Management App".to_string(),
            description: "Collaborative task management application with real-time updates"
                .to_string(),
            image_url: Some("https://via.placeholder.com/400x250".to_string()),
            demo_url: Some("https://tasks.example.com".to_string()),
            source_url: Some("https://github.com/example/taskmanager".to_string()),
            technologies: "React,SignalR,ASP.NET Core,MongoDB".to_string(),
            created_at: demo_timestamp("2024-02-20T00:00:00Z"),
            updated_at: demo_timestamp("2024-02-20T00:00:00Z"),
            is_active: true,
        },
        Project {
            id: 3,
            title: "Weather Dashboard".to_string(),
            description: "Real-time weather monitoring dashboard with interactive charts"
                .to_string(),
            image_url: Some("https://via.placeholder.com/400x250".to_string()),
            demo_url: Some("https://weather.example.com".to_string()),
            source_url: Some("https://github.com/example/weather".to_string()),
            technologies: "React,Chart.js,Weather API,Tailwind CSS".to_string(),
            created_at: demo_timestamp("2024-03-10T00:00:00Z"),
            updated_at: demo_timestamp("2024-03-10T00:00:00Z"),
            is_active: true,
        },
    ]
}

fn demo_timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("demo timestamps are valid RFC 3339")
}
