//! Console output formatter for content listings

use crate::view::{StepState, Toast, WizardView};
use agency_domain::{
    BlogPost, ConfigIssue, Paginated, PrefillContext, Severity, TaxonomyItem, TaxonomyKind,
    WorkProject,
};
use colored::Colorize;
use serde::Serialize;

/// Formats site data for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    // ==================== Listings ====================

    pub fn blog_page(page: &Paginated<BlogPost>) -> String {
        let mut output = Self::header("Blog");
        output.push('\n');
        for post in &page.data {
            output.push_str(&Self::blog_line(post));
        }
        output.push_str(&Self::page_footer(page));
        output
    }

    pub fn work_page(page: &Paginated<WorkProject>) -> String {
        let mut output = Self::header("Work");
        output.push('\n');
        for project in &page.data {
            output.push_str(&Self::work_line(project));
        }
        output.push_str(&Self::page_footer(page));
        output
    }

    fn blog_line(post: &BlogPost) -> String {
        let mut line = format!(
            "\n{} {}  {}\n",
            post.publish_date.to_string().dimmed(),
            post.title.bold(),
            format!("({})", post.slug).dimmed()
        );
        if post.featured {
            line.push_str(&format!("  {}\n", "featured".yellow()));
        }
        if !post.categories.is_empty() {
            line.push_str(&format!("  {} {}\n", "Categories:".cyan(), post.categories.join(", ")));
        }
        if !post.tags.is_empty() {
            line.push_str(&format!("  {} {}\n", "Tags:".cyan(), post.tags.join(", ")));
        }
        line
    }

    fn work_line(project: &WorkProject) -> String {
        let mut line = format!(
            "\n{} {}  {}\n",
            project.title.bold(),
            format!("for {}", project.company).dimmed(),
            format!("({})", project.slug).dimmed()
        );
        if !project.services.is_empty() {
            line.push_str(&format!("  {} {}\n", "Services:".cyan(), project.services.join(", ")));
        }
        if let Some(industry) = &project.industry {
            line.push_str(&format!("  {} {}\n", "Industry:".cyan(), industry));
        }
        line
    }

    fn page_footer<T>(page: &Paginated<T>) -> String {
        format!(
            "\n{}  {}\n",
            page.range_info().dimmed(),
            format!("page {}/{}", page.current_page, page.total_pages.max(1)).dimmed()
        )
    }

    // ==================== Single items ====================

    pub fn blog_post(post: &BlogPost) -> String {
        let mut output = Self::header(&post.title);
        output.push_str(&format!("\n{} {}\n", "Slug:".cyan().bold(), post.slug));
        output.push_str(&format!("{} {}\n", "Author:".cyan().bold(), post.author));
        output.push_str(&format!("{} {}\n", "Published:".cyan().bold(), post.publish_date));
        if let Some(minutes) = post.read_time {
            output.push_str(&format!("{} {} min read\n", "Reading:".cyan().bold(), minutes));
        }
        if post.draft {
            output.push_str(&format!("{}\n", "DRAFT".red().bold()));
        }
        output.push_str(&format!("\n{}\n", post.description));
        output.push_str(&Self::footer());
        output
    }

    pub fn work_project(project: &WorkProject) -> String {
        let mut output = Self::header(&project.title);
        output.push_str(&format!("\n{} {}\n", "Company:".cyan().bold(), project.company));
        if let Some(url) = &project.project_url {
            output.push_str(&format!("{} {}\n", "Live site:".cyan().bold(), url));
        }
        output.push_str(&format!("\n{}\n", project.description));

        if !project.stats.is_empty() {
            output.push_str(&Self::section_header("Results"));
            for stat in &project.stats {
                output.push_str(&format!("  {} {}\n", stat.value.green().bold(), stat.label));
            }
        }

        if let Some(t) = &project.testimonial {
            output.push_str(&Self::section_header("Testimonial"));
            output.push_str(&Self::indent(&format!("\"{}\"", t.quote), "  "));
            output.push_str(&format!("\n  {} {}, {}\n", "-".dimmed(), t.author, t.role));
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn related_posts(slug: &str, posts: &[BlogPost]) -> String {
        let mut output = Self::section_header(&format!("Related to {}", slug));
        if posts.is_empty() {
            output.push_str(&format!("{}\n", "No related posts".dimmed()));
        }
        for post in posts {
            output.push_str(&Self::blog_line(post));
        }
        output
    }

    pub fn related_projects(slug: &str, projects: &[WorkProject]) -> String {
        let mut output = Self::section_header(&format!("Related to {}", slug));
        if projects.is_empty() {
            output.push_str(&format!("{}\n", "No related projects".dimmed()));
        }
        for project in projects {
            output.push_str(&Self::work_line(project));
        }
        output
    }

    pub fn taxonomy(kind: TaxonomyKind, items: &[TaxonomyItem]) -> String {
        let mut output = Self::section_header(&format!("{} ({})", kind, items.len()));
        let width = items.iter().map(|i| i.name.len()).max().unwrap_or(0);
        for item in items {
            output.push_str(&format!(
                "  {:<width$}  {:>3}  {}\n",
                item.name,
                item.count,
                item.slug.dimmed(),
                width = width
            ));
        }
        output
    }

    // ==================== Wizard preview ====================

    pub fn wizard_preview(prefill: &PrefillContext, services: &[&str], view: &WizardView) -> String {
        let mut output = Self::header("Service Request");
        output.push('\n');

        let steps: Vec<String> = view
            .steps
            .iter()
            .map(|s| {
                let label = format!("{}. {}", s.number, s.title);
                match s.state {
                    StepState::Completed => label.green().to_string(),
                    StepState::Active => label.cyan().bold().to_string(),
                    StepState::Upcoming => label.dimmed().to_string(),
                }
            })
            .collect();
        output.push_str(&format!("{}\n\n", steps.join("  >  ")));

        let or_none = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{} {}\n",
            "Services:".cyan().bold(),
            if services.is_empty() { "-".to_string() } else { services.join(", ") }
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Package:".cyan().bold(),
            or_none(prefill.selected_package.as_ref().map(|p| p.display_name()))
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Update type:".cyan().bold(),
            or_none(prefill.update_type.as_ref().map(|u| u.display_name()))
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Managed hosting:".cyan().bold(),
            if !view.show_hosting_option {
                "not offered".dimmed().to_string()
            } else if prefill.managed_hosting {
                "selected".to_string()
            } else {
                "available".to_string()
            }
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Expires:".cyan().bold(),
            prefill.expires_at.to_rfc3339()
        ));

        if let Some(toast) = &view.toast {
            output.push_str(&format!("\n{}\n", Self::toast(toast)));
        }
        output.push_str(&Self::footer());
        output
    }

    pub fn toast(toast: &Toast) -> String {
        match toast {
            Toast::Success(m) => m.green().to_string(),
            Toast::Error(m) => m.red().to_string(),
        }
    }

    // ==================== Configuration ====================

    pub fn config_issues(issues: &[ConfigIssue]) -> String {
        if issues.is_empty() {
            return format!("{}\n", "Configuration OK".green());
        }
        let mut output = String::new();
        for issue in issues {
            let label = match issue.severity {
                Severity::Error => "error:".red().bold(),
                Severity::Warning => "warning:".yellow().bold(),
            };
            output.push_str(&format!("{} {}\n", label, issue.message));
        }
        output
    }

    // ==================== Helpers ====================

    /// Format as JSON
    pub fn json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
