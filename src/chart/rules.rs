//! Validation rules of a chart.

use super::line_style::style_names;
use super::{Chart, RenderOptions};
use crate::query::Separator;
use crate::validation::{self, Validate, Validation};
use crate::{Result, SmartChartError};

impl Validate for Chart {
    fn validations(&self) -> Vec<Validation> {
        self.spec().validations.to_vec()
    }

    fn check(&self, step: Validation) -> Result<()> {
        match step {
            Validation::LineStyleNames => self.check_line_style_names(),
            Validation::RequiredAttributes => self.check_required(),
            Validation::Dimensions => self.check_dimensions(),
            Validation::DataFormat => self.check_data_format(),
            Validation::Labels => (self.spec().check_labels)(self),
            Validation::Colors => validation::check_colors(self.colors()),
            Validation::UrlLength => self.check_url_length(),
        }
    }
}

impl Chart {
    fn check_required(&self) -> Result<()> {
        let present: Vec<(&'static str, bool)> = self
            .spec()
            .required
            .iter()
            .map(|a| (a.name(), self.options().is_set(*a)))
            .collect();
        validation::check_required(self.shape().name(), &present)
    }

    fn check_dimensions(&self) -> Result<()> {
        match (self.options().width, self.options().height) {
            (Some(width), Some(height)) => {
                validation::check_dimensions(width, height, self.spec().dimensions)
            }
            _ => Ok(()),
        }
    }

    fn check_data_format(&self) -> Result<()> {
        let spec = self.spec();
        if let Some(style) = self.options().style
            && !spec.styles.contains(&style)
        {
            let valid: Vec<&str> = spec.styles.iter().map(|s| s.name()).collect();
            return Err(SmartChartError::DataFormat(format!(
                "The {} chart type does not support the '{}' style; use one of: {}",
                spec.name,
                style.name(),
                valid.join(", ")
            )));
        }
        (spec.check_data_format)(self)
    }

    fn check_line_style_names(&self) -> Result<()> {
        let data_styles = self
            .options()
            .data
            .iter()
            .flat_map(|d| d.styled())
            .filter_map(|s| s.style.as_ref());
        let grid_style = self.options().grid.as_ref().and_then(|g| g.style.as_ref());

        for style in data_styles.chain(grid_style) {
            if let Some(name) = style.unknown_name() {
                return Err(SmartChartError::LineStyleName {
                    name: name.to_string(),
                    valid: style_names(),
                });
            }
        }
        Ok(())
    }

    /// Every color value the chart carries, in attribute order.
    fn colors(&self) -> Vec<&str> {
        let options = self.options();
        let mut colors: Vec<&str> = options.background.as_deref().into_iter().collect();
        if let Some(data) = options.data.as_ref() {
            colors.extend(
                data.styled()
                    .filter_map(|s| s.color.as_ref())
                    .flat_map(|c| c.colors()),
            );
        }
        colors.extend(options.colors.iter().flatten().map(String::as_str));
        colors.extend(options.foreground.as_deref());
        colors.extend(options.axis.as_ref().and_then(|a| a.color.as_deref()));
        colors
    }

    /// Measures the encoded URL without re-entering validation.
    fn check_url_length(&self) -> Result<()> {
        let url = self.url(&RenderOptions {
            encode: true,
            validate: false,
            separator: Separator::Ampersand,
        })?;
        validation::check_url_length(&url)
    }
}
