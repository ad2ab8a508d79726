//! The fixed campaign: eight economic events played in order.

use crate::{Effects, PolicyOption, Scenario};

fn opt(description: &str, effects: Effects, explanation: &str) -> PolicyOption {
    PolicyOption {
        description: description.to_string(),
        effects,
        explanation: explanation.to_string(),
    }
}

fn scenario(title: &str, situation: &str, options: [PolicyOption; 3]) -> Scenario {
    Scenario {
        title: title.to_string(),
        situation: situation.to_string(),
        options: options.into(),
    }
}

/// Build the campaign table. Inflation and unemployment deltas are in tenths.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        scenario(
            "Oil Price Shock",
            "A sudden increase in global oil prices is leading to higher production costs and consumer prices.",
            [
                opt(
                    "Subsidize Fuel Costs",
                    Effects::tenths(-10, 0, 3),
                    "Government absorbs some of the cost, easing inflation but increasing the budget deficit.",
                ),
                opt(
                    "Promote Energy Conservation",
                    Effects::tenths(-5, 5, 2),
                    "Encourages reduced energy use, lowering demand and prices.",
                ),
                opt(
                    "Invest in Alternative Energy",
                    Effects::tenths(5, -10, 4),
                    "Long-term solution that may stimulate the economy and reduce future inflation.",
                ),
            ],
        ),
        scenario(
            "Housing Market Collapse",
            "The housing market is experiencing a downturn, leading to reduced construction activity and job losses.",
            [
                opt(
                    "Implement Housing Stimulus",
                    Effects::tenths(5, -15, 3),
                    "Stimulating the housing market boosts employment but may raise inflation.",
                ),
                opt(
                    "Offer Tax Credits to Homebuyers",
                    Effects::tenths(2, -10, 2),
                    "Encourages home purchases, supporting the market and jobs.",
                ),
                opt(
                    "Allow Market Correction",
                    Effects::tenths(-5, 10, -2),
                    "Non-intervention may stabilize prices but leads to higher unemployment.",
                ),
            ],
        ),
        scenario(
            "Currency Appreciation",
            "The national currency is appreciating rapidly, making exports more expensive and imports cheaper.",
            [
                opt(
                    "Intervene in Currency Markets",
                    Effects::tenths(10, -10, 1),
                    "Weakening the currency helps exporters but can increase inflation.",
                ),
                opt(
                    "Reduce Interest Rates",
                    Effects::tenths(5, -5, 1),
                    "Lower rates make borrowing cheaper, stimulating the economy but may weaken the currency.",
                ),
                opt(
                    "No Intervention",
                    Effects::tenths(-5, 10, -2),
                    "Allowing the currency to appreciate may hurt employment.",
                ),
            ],
        ),
        scenario(
            "Agricultural Shortage",
            "A drought has reduced agricultural output, leading to higher food prices.",
            [
                opt(
                    "Import Food Supplies",
                    Effects::tenths(-10, 5, 2),
                    "Addresses immediate shortages but may harm domestic agriculture.",
                ),
                opt(
                    "Provide Aid to Farmers",
                    Effects::tenths(0, 0, 3),
                    "Supports farmers, maintains employment, but doesn't lower food prices.",
                ),
                opt(
                    "Implement Price Controls on Food",
                    Effects::tenths(-5, 10, 2),
                    "Short-term relief but may lead to shortages.",
                ),
            ],
        ),
        scenario(
            "Technological Innovation Boom",
            "A surge in technological innovation is automating jobs, increasing productivity but leading to job displacement.",
            [
                opt(
                    "Invest in Education and Training",
                    Effects::tenths(5, -15, 4),
                    "Prepares workforce for new jobs, boosting future employment.",
                ),
                opt(
                    "Tax Automation",
                    Effects::tenths(10, -10, 2),
                    "Slows automation, preserves jobs, but may hinder innovation.",
                ),
                opt(
                    "Encourage Technological Advancement",
                    Effects::tenths(-5, 10, -2),
                    "Focuses on long-term economic growth at the expense of short-term employment.",
                ),
            ],
        ),
        scenario(
            "Financial Market Instability",
            "Volatility in financial markets is causing uncertainty, affecting investment and economic growth.",
            [
                opt(
                    "Implement Regulatory Reforms",
                    Effects::tenths(0, 5, 3),
                    "Aims to stabilize markets, may slow economic activity.",
                ),
                opt(
                    "Provide Stimulus to Financial Institutions",
                    Effects::tenths(5, -5, -2),
                    "Supports markets, but may be unpopular.",
                ),
                opt(
                    "Establish Public Investment Funds",
                    Effects::tenths(3, -5, 2),
                    "Government invests directly in the economy, promoting growth.",
                ),
            ],
        ),
        scenario(
            "Labor Strike Wave",
            "Multiple industries are experiencing strikes over wages and working conditions.",
            [
                opt(
                    "Mediate Negotiations",
                    Effects::tenths(2, 0, 3),
                    "Facilitates agreements, restoring production.",
                ),
                opt(
                    "Legislate to Limit Strikes",
                    Effects::tenths(0, -5, -3),
                    "Forces workers back but harms approval.",
                ),
                opt(
                    "Increase Minimum Wage",
                    Effects::tenths(10, 10, 2),
                    "Addresses wage concerns but risks inflation and unemployment.",
                ),
            ],
        ),
        scenario(
            "Natural Disaster Impact",
            "A major natural disaster has damaged infrastructure, disrupting economic activity.",
            [
                opt(
                    "Invest in Reconstruction",
                    Effects::tenths(5, -10, 4),
                    "Stimulates the economy, positive public sentiment.",
                ),
                opt(
                    "Seek International Aid",
                    Effects::tenths(0, -5, 2),
                    "Brings in resources, lessens budget impact.",
                ),
                opt(
                    "Implement Austerity to Fund Recovery",
                    Effects::tenths(-5, 10, -3),
                    "Funds recovery without increasing debt but harms employment and approval.",
                ),
            ],
        ),
    ]
}
