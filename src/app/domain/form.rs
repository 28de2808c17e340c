use serde::{Deserialize, Serialize};

/// README layout requested from the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemplateType {
    Api,
    Library,
    Frontend,
    Cli,
    Fullstack,
}

impl TemplateType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Api => "API",
            Self::Library => "Library",
            Self::Frontend => "Frontend",
            Self::Cli => "CLI",
            Self::Fullstack => "Fullstack",
        }
    }

    pub fn all() -> &'static [TemplateType] {
        &[
            Self::Api,
            Self::Library,
            Self::Frontend,
            Self::Cli,
            Self::Fullstack,
        ]
    }
}

/// Free-text fields of the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ProjectName,
    Tagline,
    Description,
    Features,
    Installation,
    Usage,
    RepositoryUrl,
    DemoUrl,
    License,
    Author,
    CustomSections,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProjectName => "Project name",
            Self::Tagline => "Tagline",
            Self::Description => "Description",
            Self::Features => "Features",
            Self::Installation => "Installation",
            Self::Usage => "Usage",
            Self::RepositoryUrl => "Repository URL",
            Self::DemoUrl => "Demo URL",
            Self::License => "License",
            Self::Author => "Author",
            Self::CustomSections => "Custom sections",
        }
    }

    /// Fields the form refuses to submit while blank.
    pub fn required() -> &'static [FormField] {
        &[Self::ProjectName, Self::Description]
    }
}

/// Optional README sections toggled by checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeFlag {
    Badges,
    TableOfContents,
    Screenshots,
    Contributing,
    License,
}

impl IncludeFlag {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Badges => "Badges",
            Self::TableOfContents => "Table of contents",
            Self::Screenshots => "Screenshots section",
            Self::Contributing => "Contributing guide",
            Self::License => "License section",
        }
    }

    pub fn all() -> &'static [IncludeFlag] {
        &[
            Self::Badges,
            Self::TableOfContents,
            Self::Screenshots,
            Self::Contributing,
            Self::License,
        ]
    }
}

/// Current values of every form control except the technology tags,
/// which live in `AppState`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub project_name: String,
    pub tagline: String,
    pub description: String,
    pub template_type: Option<TemplateType>,
    pub features: String,
    pub installation: String,
    pub usage: String,
    pub repository_url: String,
    pub demo_url: String,
    pub license: String,
    pub author: String,
    pub custom_sections: String,
    pub include_badges: bool,
    pub include_table_of_contents: bool,
    pub include_screenshots: bool,
    pub include_contributing: bool,
    pub include_license: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            tagline: String::new(),
            description: String::new(),
            template_type: Some(TemplateType::Library),
            features: String::new(),
            installation: String::new(),
            usage: String::new(),
            repository_url: String::new(),
            demo_url: String::new(),
            license: "MIT".to_string(),
            author: String::new(),
            custom_sections: String::new(),
            include_badges: true,
            include_table_of_contents: false,
            include_screenshots: false,
            include_contributing: true,
            include_license: true,
        }
    }
}

impl FormState {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::ProjectName => &self.project_name,
            FormField::Tagline => &self.tagline,
            FormField::Description => &self.description,
            FormField::Features => &self.features,
            FormField::Installation => &self.installation,
            FormField::Usage => &self.usage,
            FormField::RepositoryUrl => &self.repository_url,
            FormField::DemoUrl => &self.demo_url,
            FormField::License => &self.license,
            FormField::Author => &self.author,
            FormField::CustomSections => &self.custom_sections,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::ProjectName => &mut self.project_name,
            FormField::Tagline => &mut self.tagline,
            FormField::Description => &mut self.description,
            FormField::Features => &mut self.features,
            FormField::Installation => &mut self.installation,
            FormField::Usage => &mut self.usage,
            FormField::RepositoryUrl => &mut self.repository_url,
            FormField::DemoUrl => &mut self.demo_url,
            FormField::License => &mut self.license,
            FormField::Author => &mut self.author,
            FormField::CustomSections => &mut self.custom_sections,
        };
        *slot = value;
    }

    pub fn flag(&self, flag: IncludeFlag) -> bool {
        match flag {
            IncludeFlag::Badges => self.include_badges,
            IncludeFlag::TableOfContents => self.include_table_of_contents,
            IncludeFlag::Screenshots => self.include_screenshots,
            IncludeFlag::Contributing => self.include_contributing,
            IncludeFlag::License => self.include_license,
        }
    }

    pub fn set_flag(&mut self, flag: IncludeFlag, enabled: bool) {
        match flag {
            IncludeFlag::Badges => self.include_badges = enabled,
            IncludeFlag::TableOfContents => self.include_table_of_contents = enabled,
            IncludeFlag::Screenshots => self.include_screenshots = enabled,
            IncludeFlag::Contributing => self.include_contributing = enabled,
            IncludeFlag::License => self.include_license = enabled,
        }
    }

    /// Required fields that are blank, in form order.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::required()
            .iter()
            .copied()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    pub fn snapshot(&self, technologies: &[String]) -> FormSnapshot {
        let custom = self.custom_sections.trim();
        FormSnapshot {
            project_name: self.project_name.clone(),
            tagline: self.tagline.clone(),
            description: self.description.clone(),
            template_type: self.template_type,
            technologies: technologies.to_vec(),
            features: self.features.clone(),
            installation: self.installation.clone(),
            usage: self.usage.clone(),
            repository_url: self.repository_url.clone(),
            demo_url: self.demo_url.clone(),
            license: self.license.clone(),
            author: self.author.clone(),
            custom_sections: (!custom.is_empty()).then(|| self.custom_sections.clone()),
            include_badges: self.include_badges,
            include_table_of_contents: self.include_table_of_contents,
            include_screenshots: self.include_screenshots,
            include_contributing: self.include_contributing,
            include_license: self.include_license,
        }
    }
}

/// Body of a generation request, frozen at submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub project_name: String,
    pub tagline: String,
    pub description: String,
    pub template_type: Option<TemplateType>,
    pub technologies: Vec<String>,
    pub features: String,
    pub installation: String,
    pub usage: String,
    pub repository_url: String,
    pub demo_url: String,
    pub license: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_sections: Option<String>,
    pub include_badges: bool,
    pub include_table_of_contents: bool,
    pub include_screenshots: bool,
    pub include_contributing: bool,
    pub include_license: bool,
}

/// The slice of the form kept in durable storage between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSnapshot {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl DraftSnapshot {
    pub fn capture(form: &FormState, technologies: &[String]) -> Self {
        Self {
            project_name: form.project_name.clone(),
            description: form.description.clone(),
            technologies: technologies.to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.project_name.is_empty() && self.description.is_empty() && self.technologies.is_empty()
    }
}
