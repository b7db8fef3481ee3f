use std::cell::RefCell;

use super::*;

/// Records which steps ran and fails on a chosen one.
struct Recorder {
    steps: Vec<Validation>,
    fail_on: Option<Validation>,
    ran: RefCell<Vec<Validation>>,
}

impl Recorder {
    fn new(fail_on: Option<Validation>) -> Self {
        Self {
            steps: BASE_VALIDATIONS.to_vec(),
            fail_on,
            ran: RefCell::new(Vec::new()),
        }
    }
}

impl Validate for Recorder {
    fn validations(&self) -> Vec<Validation> {
        self.steps.clone()
    }

    fn check(&self, step: Validation) -> Result<()> {
        self.ran.borrow_mut().push(step);
        if self.fail_on == Some(step) {
            return Err(SmartChartError::DataFormat(step.name().to_string()));
        }
        Ok(())
    }
}

mod pipeline_tests {
    use super::*;

    #[test]
    fn runs_steps_in_declared_order() {
        let target = Recorder::new(None);
        run(&target, &[]).unwrap();
        assert_eq!(*target.ran.borrow(), BASE_VALIDATIONS);
    }

    #[test]
    fn stops_at_first_failure() {
        let target = Recorder::new(Some(Validation::DataFormat));
        let err = run(&target, &[]).unwrap_err();
        assert!(err.to_string().contains("data-format"));
        assert_eq!(
            *target.ran.borrow(),
            [
                Validation::RequiredAttributes,
                Validation::Dimensions,
                Validation::DataFormat
            ]
        );
    }

    #[test]
    fn skipped_steps_do_not_run() {
        let target = Recorder::new(Some(Validation::UrlLength));
        run(&target, &[Validation::UrlLength]).unwrap();
        assert!(!target.ran.borrow().contains(&Validation::UrlLength));
    }
}

mod rule_tests {
    use super::*;

    #[test]
    fn required_reports_first_missing_attribute() {
        let err = check_required("Line", &[("width", true), ("height", false), ("data", false)])
            .unwrap_err();
        assert!(matches!(
            err,
            SmartChartError::MissingRequiredAttribute {
                chart: "Line",
                attribute: "height"
            }
        ));
        assert!(check_required("Line", &[("width", true)]).is_ok());
    }

    #[test]
    fn pixel_budget() {
        assert!(matches!(
            check_dimensions(800, 600, DimensionLimit::default()),
            Err(SmartChartError::Dimensions(_))
        ));
        assert!(check_dimensions(400, 600, DimensionLimit::default()).is_ok());
        assert!(check_dimensions(1000, 300, DimensionLimit::default()).is_ok());
    }

    #[test]
    fn per_axis_limit() {
        let limit = DimensionLimit::PerAxis {
            max_width: 440,
            max_height: 220,
        };
        assert!(check_dimensions(440, 220, limit).is_ok());
        assert!(check_dimensions(500, 200, limit).is_err());
        assert!(check_dimensions(400, 300, limit).is_err());
    }

    #[test]
    fn zero_side_is_rejected() {
        let err = check_dimensions(0, 100, DimensionLimit::default()).unwrap_err();
        assert_eq!(err.message(), "Width and height must be positive, got 0x100");
        let limit = DimensionLimit::PerAxis {
            max_width: 440,
            max_height: 220,
        };
        assert!(check_dimensions(440, 0, limit).is_err());
    }

    #[test]
    fn color_format() {
        for valid in ["fcfcfc", "FCFCFC", "123456", "a1b2c3"] {
            assert!(check_color(valid).is_ok(), "{valid} should be accepted");
        }
        for invalid in ["fcf", "012", "12345q", "1234567", "#fcfcfc", ""] {
            assert!(
                matches!(check_color(invalid), Err(SmartChartError::ColorFormat(_))),
                "{invalid} should be rejected"
            );
        }
    }

    #[test]
    fn colors_reports_first_invalid() {
        let err = check_colors(["ffffff", "xyz", "000"]).unwrap_err();
        assert_eq!(err.message(), "Invalid color 'xyz': colors must be given as six hexadecimal digits");
    }

    #[test]
    fn url_length_limit() {
        assert!(check_url_length(&"a".repeat(URL_MAX_LENGTH)).is_ok());
        assert!(matches!(
            check_url_length(&"a".repeat(URL_MAX_LENGTH + 1)),
            Err(SmartChartError::UrlLength { length: 2075, max: 2074 })
        ));
    }
}
