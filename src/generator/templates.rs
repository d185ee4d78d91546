//! Dockerfile templates, one per project type.
//!
//! Each body has a single `{{ version }}` slot for the base image tag.

use crate::analyzer::ProjectType;
use tera::Tera;

pub const JAVA_DOCKERFILE: &str = r#"FROM openjdk:{{ version }}-jdk-slim
WORKDIR /app
COPY . .
RUN ./mvnw package -DskipTests
EXPOSE 8080
CMD ["java", "-jar", "target/*.jar"]
"#;

pub const GO_DOCKERFILE: &str = r#"FROM golang:{{ version }}-alpine
WORKDIR /app
COPY . .
RUN go build -o main
EXPOSE 8080
CMD ["./main"]
"#;

pub const PYTHON_DOCKERFILE: &str = r#"FROM python:{{ version }}-slim
WORKDIR /app
COPY requirements.txt .
RUN pip install -r requirements.txt
COPY . .
EXPOSE 8000
CMD ["python", "app.py"]
"#;

pub const NODE_DOCKERFILE: &str = r#"FROM node:{{ version }}-alpine
WORKDIR /app
COPY package*.json ./
RUN npm install
COPY . .
EXPOSE 3000
CMD ["npm", "start"]
"#;

/// Name the template for `project_type` is registered under.
pub fn template_name(project_type: ProjectType) -> String {
    format!("{}.Dockerfile", project_type)
}

/// Builds a Tera instance holding every Dockerfile template.
pub fn registry() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (template_name(ProjectType::Java), JAVA_DOCKERFILE),
        (template_name(ProjectType::Go), GO_DOCKERFILE),
        (template_name(ProjectType::Python), PYTHON_DOCKERFILE),
        (template_name(ProjectType::Node), NODE_DOCKERFILE),
    ])?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_project_type_has_template() {
        let tera = registry().unwrap();
        let names: Vec<&str> = tera.get_template_names().collect();
        for project_type in ProjectType::PRIORITY {
            assert!(names.contains(&template_name(project_type).as_str()));
        }
    }

    #[test]
    fn test_single_version_slot() {
        for body in [JAVA_DOCKERFILE, GO_DOCKERFILE, PYTHON_DOCKERFILE, NODE_DOCKERFILE] {
            assert_eq!(body.matches("{{ version }}").count(), 1);
            assert!(body.starts_with("FROM "));
        }
    }
}
