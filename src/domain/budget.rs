/// How close spending is to the monthly budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

impl Severity {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 95.0 {
            Severity::Critical
        } else if percent >= 80.0 {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }

    /// Alert headline; Normal shows no alert
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            Severity::Normal => None,
            Severity::Warning => Some("Approaching Budget Limit"),
            Severity::Critical => Some("Budget Almost Depleted"),
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Severity::Normal => None,
            Severity::Warning => Some(
                "You're using more than 80% of your monthly budget. Monitor your usage carefully.",
            ),
            Severity::Critical => Some(
                "You've used nearly all of your monthly budget. Consider upgrading or reducing usage.",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget {
    pub monthly_budget: f64,
    pub current_usage: f64,
}

impl Budget {
    pub fn new(monthly_budget: f64, current_usage: f64) -> Self {
        Self {
            monthly_budget,
            current_usage,
        }
    }

    /// Share of the budget spent, as a percentage. Always finite.
    pub fn usage_percent(&self) -> f64 {
        if self.monthly_budget <= 0.0 {
            return 0.0;
        }
        let percent = self.current_usage / self.monthly_budget * 100.0;
        if percent.is_finite() { percent } else { 0.0 }
    }

    pub fn remaining(&self) -> f64 {
        self.monthly_budget - self.current_usage
    }

    pub fn severity(&self) -> Severity {
        Severity::from_percent(self.usage_percent())
    }
}

pub struct CostItem {
    pub name: &'static str,
    pub cost: u32,
    pub percent: u16,
}

pub const COST_BREAKDOWN: &[CostItem] = &[
    CostItem {
        name: "AI Usage (GPT-4)",
        cost: 28,
        percent: 67,
    },
    CostItem {
        name: "Server & Hosting",
        cost: 10,
        percent: 24,
    },
    CostItem {
        name: "Database Storage",
        cost: 4,
        percent: 9,
    },
];

pub const USAGE_TIPS: &[&str] = &[
    "Enable Redis caching to reduce AI costs by 30-50%",
    "Generate content in batches to optimize API usage",
    "Use shorter content lengths when appropriate to reduce costs",
    "Review and edit generated content before publishing to maintain quality",
    "Set up webhooks to automate your workflow with Zapier or Make",
];
