//! Plain-text rendering of catalog listings, zone reports and the calendar

use application::services::{CalendarRow, ZoneReport};
use domain::entities::{Catalog, SeasonStatus, SpeciesProfile};

fn join(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// One line per zone
pub fn zones(catalog: &Catalog) -> String {
    let mut out = String::from("🎣 Fishing zones\n");
    for zone in catalog.zones() {
        out.push_str(&format!(
            "  {:<12} {:<28} {:<14} {}\n",
            zone.id.as_str(),
            zone.name,
            zone.water_body.label(),
            zone.location
        ));
    }
    out
}

/// Species with their preferred conditions
pub fn species(profiles: &[&SpeciesProfile]) -> String {
    if profiles.is_empty() {
        return "No species found\n".to_string();
    }

    let mut out = String::from("🐟 Species\n");
    for profile in profiles {
        out.push_str(&format!(
            "  {:<16} water {:>4.1}-{:<4.1} °C  pressure {:.0}-{:.0} hPa\n",
            profile.name,
            profile.water_temp.min(),
            profile.water_temp.max(),
            profile.pressure_low,
            profile.pressure_high
        ));
        let hours: Vec<String> = profile
            .active_hours
            .iter()
            .map(|p| p.label().to_string())
            .collect();
        out.push_str(&format!(
            "    habitat: {}  active: {}\n",
            join(&profile.habitat_zones),
            join(&hours)
        ));
    }
    out
}

/// Full zone report
pub fn report(report: &ZoneReport) -> String {
    let snapshot = &report.snapshot;
    let mut out = format!(
        "📍 {} - {}\n",
        report.zone_name,
        report.generated_at.format("%d/%m/%Y %H:%M")
    );
    if !snapshot.is_live() {
        out.push_str("⚠️  Live weather unavailable, showing simulated conditions\n");
    }

    out.push_str(&format!(
        "🌡️  Air {:.1} °C · Water {:.1} °C · {:.0} hPa · Humidity {} · Wind {:.0} km/h\n",
        snapshot.air_temperature(),
        snapshot.water_temperature(),
        snapshot.pressure(),
        snapshot.humidity(),
        snapshot.wind_speed()
    ));
    out.push_str(&format!(
        "☁️  {} · Clouds {} · Water level {}\n",
        snapshot.weather_code().description(),
        snapshot.cloud_cover(),
        report.water_level_trend.label()
    ));
    out.push_str(&format!(
        "{} {} (day {:.1}) · {}\n",
        report.moon_phase.emoji(),
        report.moon_phase.label(),
        report.moon_age,
        report.season.label()
    ));
    out.push_str(&format!("Outlook: {}\n", report.outlook));

    out.push_str("\nSpecies:\n");
    if report.rankings.is_empty() {
        out.push_str("  No species live in this zone\n");
    }
    for (rank, ranked) in report.rankings.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. {:<16} {:>3}  {:<9}{}\n",
            rank + 1,
            ranked.name,
            ranked.score.value,
            ranked.tier.to_string(),
            if ranked.active_now { "  ● active now" } else { "" }
        ));
        out.push_str(&format!(
            "      baits: {} · techniques: {}\n",
            join(&ranked.baits),
            join(&ranked.techniques)
        ));
    }

    let outlook = &report.hourly_outlook;
    if !outlook.hours.is_empty() {
        out.push_str("\nNext hours:\n");
        for point in &outlook.hours {
            out.push_str(&format!(
                "  {}  {:>5.1} °C  {:>4}  {}\n",
                point.clock(),
                point.temperature,
                point.precipitation_probability.to_string(),
                point.weather_code.description()
            ));
        }
        if !outlook.rain_warnings.is_empty() {
            let times: Vec<String> = outlook
                .rain_warnings
                .iter()
                .map(|t| t.format("%H:%M").to_string())
                .collect();
            out.push_str(&format!("🌧️  Rain likely at {}\n", times.join(", ")));
        }
        if !outlook.best_hours.is_empty() {
            let times: Vec<String> = outlook
                .best_hours
                .iter()
                .map(|t| t.format("%H:%M").to_string())
                .collect();
            out.push_str(&format!("✅ Best windows {}\n", times.join(", ")));
        }
    }
    out
}

/// Calendar rows with regulations and status
pub fn calendar(rows: &[CalendarRow]) -> String {
    if rows.is_empty() {
        return "No species match\n".to_string();
    }

    let mut out = String::from("📅 Fishing calendar\n");
    for row in rows {
        let icon = match row.status {
            SeasonStatus::Open { .. } => "🟢",
            SeasonStatus::Suspended { .. } => "🟠",
            SeasonStatus::NotYetOpen { .. } | SeasonStatus::Closed => "🔴",
        };
        let entry = &row.entry;
        out.push_str(&format!(
            "  {icon} {:<16} {} → {}  {}\n",
            row.species_name, entry.opens, entry.closes, row.status
        ));

        let mut rules = Vec::new();
        if let Some(size) = entry.min_size_cm {
            rules.push(format!("min {size} cm"));
        }
        if let Some(limit) = entry.daily_limit {
            rules.push(format!("max {limit}/day"));
        }
        for period in &entry.closed_periods {
            rules.push(format!(
                "closed {} → {}{}",
                period.from,
                period.until,
                period
                    .reason
                    .as_ref()
                    .map(|r| format!(" ({r})"))
                    .unwrap_or_default()
            ));
        }
        if entry.removal_required {
            rules.push("catch must be kept".to_string());
        }
        out.push_str(&format!(
            "      zones: {}  rules: {}\n",
            join(&entry.zones),
            join(&rules)
        ));
        if let Some(notes) = &entry.notes {
            out.push_str(&format!("      {notes}\n"));
        }
    }
    out
}
