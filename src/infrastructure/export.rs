use crate::domain::{DomainError, DomainResult, Project};
use std::path::Path;

pub struct CsvExporter;

impl CsvExporter {
    /// Writes `projects` to `path` as CSV, one row per project in the given order.
    ///
    /// Returns the path written on success.
    pub fn export_projects(projects: &[Project], path: &str) -> DomainResult<String> {
        let mut writer = csv::Writer::from_path(Path::new(path))
            .map_err(|e| DomainError::Export(e.to_string()))?;

        writer
            .write_record(["id", "title", "description", "people", "status"])
            .map_err(|e| DomainError::Export(e.to_string()))?;

        for project in projects {
            let people = project.people.to_string();
            let status = project.status.to_string();
            writer
                .write_record([
                    project.id.as_str(),
                    project.title.as_str(),
                    project.description.as_str(),
                    people.as_str(),
                    status.as_str(),
                ])
                .map_err(|e| DomainError::Export(e.to_string()))?;
        }

        writer.flush().map_err(|e| DomainError::Export(e.to_string()))?;
        Ok(path.to_string())
    }
}
