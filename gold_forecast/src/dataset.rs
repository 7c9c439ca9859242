//! Built-in historical data: gold, S&P 500, US CPI, yearly volatility and
//! the annotated market events

use crate::data::TimeSeriesPoint;
use crate::error::Result;
use crate::events::MarketEvent;
use crate::utils::parse_date;
use crate::volatility::VolatilityPoint;

/// Raw input series for a gold report
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Gold price in USD/oz, sparse with a run of daily quotes at the end
    pub gold: Vec<TimeSeriesPoint>,
    /// S&P 500 index level
    pub equity: Vec<TimeSeriesPoint>,
    /// CPI year-over-year change in percent
    pub inflation: Vec<TimeSeriesPoint>,
    /// Yearly gold volatility in percent
    pub gold_volatility: Vec<VolatilityPoint>,
    /// Yearly S&P 500 volatility in percent
    pub equity_volatility: Vec<VolatilityPoint>,
    pub events: Vec<MarketEvent>,
}

impl Dataset {
    /// Data for 2000-01 through 2025-10
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            gold: points(GOLD_PRICES)?,
            equity: points(SP500_LEVELS)?,
            inflation: points(CPI_YOY)?,
            gold_volatility: volatility(GOLD_VOLATILITY)?,
            equity_volatility: volatility(SP500_VOLATILITY)?,
            events: EVENTS
                .iter()
                .map(EventRecord::to_event)
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

fn points(rows: &[(&str, f64)]) -> Result<Vec<TimeSeriesPoint>> {
    rows.iter()
        .map(|&(date, value)| Ok(TimeSeriesPoint::new(parse_date(date)?, value)))
        .collect()
}

fn volatility(rows: &[(&str, f64)]) -> Result<Vec<VolatilityPoint>> {
    rows.iter()
        .map(|&(date, value)| Ok(VolatilityPoint::new(parse_date(date)?, value)))
        .collect()
}

struct EventRecord {
    date: &'static str,
    title: &'static str,
    description: &'static str,
    color: &'static str,
    gold_price: f64,
    equity_level: f64,
}

impl EventRecord {
    fn to_event(&self) -> Result<MarketEvent> {
        let mut event = MarketEvent::new(
            parse_date(self.date)?,
            self.title,
            self.description,
            self.color,
        );
        event.gold_price = Some(self.gold_price);
        event.equity_level = Some(self.equity_level);
        Ok(event)
    }
}

/// USD/oz; daily closes for October 2025
const GOLD_PRICES: &[(&str, f64)] = &[
    ("2000-01-01", 282.85),
    ("2000-06-01", 286.40),
    ("2001-01-01", 271.04),
    ("2001-06-01", 270.30),
    ("2002-01-01", 309.73),
    ("2002-06-01", 321.35),
    ("2003-01-01", 363.38),
    ("2003-06-01", 356.85),
    ("2004-01-01", 409.72),
    ("2004-06-01", 392.00),
    ("2005-01-01", 444.74),
    ("2005-06-01", 429.00),
    ("2006-01-01", 603.46),
    ("2006-06-01", 596.75),
    ("2007-01-01", 695.39),
    ("2007-06-01", 665.50),
    ("2007-12-01", 833.75),
    ("2008-01-01", 871.96),
    ("2008-03-01", 968.40),
    ("2008-06-01", 889.50),
    ("2008-09-01", 884.50),
    ("2008-12-01", 865.00),
    ("2009-01-01", 865.00),
    ("2009-06-01", 934.50),
    ("2009-12-01", 1087.50),
    ("2010-01-01", 1096.56),
    ("2010-06-01", 1244.00),
    ("2010-12-01", 1405.50),
    ("2011-01-01", 1420.25),
    ("2011-06-01", 1505.50),
    ("2011-09-01", 1895.00),
    ("2011-12-01", 1531.00),
    ("2012-01-01", 1675.00),
    ("2012-06-01", 1598.00),
    ("2012-12-01", 1675.70),
    ("2013-01-01", 1687.15),
    ("2013-06-01", 1414.80),
    ("2013-12-01", 1204.50),
    ("2014-01-01", 1233.75),
    ("2014-06-01", 1281.85),
    ("2014-12-01", 1206.00),
    ("2015-01-01", 1184.25),
    ("2015-06-01", 1172.35),
    ("2015-12-01", 1060.00),
    ("2016-01-01", 1151.05),
    ("2016-06-01", 1320.75),
    ("2016-07-01", 1366.25),
    ("2016-12-01", 1146.70),
    ("2017-01-01", 1257.15),
    ("2017-06-01", 1241.50),
    ("2017-12-01", 1291.80),
    ("2018-01-01", 1302.50),
    ("2018-06-01", 1253.00),
    ("2018-12-01", 1281.30),
    ("2019-01-01", 1392.60),
    ("2019-06-01", 1400.25),
    ("2019-09-01", 1514.75),
    ("2019-12-01", 1523.10),
    ("2020-01-01", 1520.55),
    ("2020-02-01", 1589.20),
    ("2020-03-01", 1622.10),
    ("2020-04-01", 1683.05),
    ("2020-05-01", 1730.55),
    ("2020-06-01", 1781.00),
    ("2020-07-01", 1964.65),
    ("2020-08-01", 2067.15),
    ("2020-09-01", 1886.75),
    ("2020-10-01", 1878.25),
    ("2020-11-01", 1783.35),
    ("2020-12-01", 1893.10),
    ("2021-01-01", 1943.34),
    ("2021-02-01", 1734.00),
    ("2021-03-01", 1742.65),
    ("2021-04-01", 1768.55),
    ("2021-05-01", 1907.55),
    ("2021-06-01", 1770.38),
    ("2021-07-01", 1804.10),
    ("2021-08-01", 1814.15),
    ("2021-09-01", 1756.65),
    ("2021-10-01", 1783.85),
    ("2021-11-01", 1779.00),
    ("2021-12-01", 1806.55),
    ("2022-01-01", 1829.20),
    ("2022-02-01", 1900.45),
    ("2022-03-01", 2043.30),
    ("2022-04-01", 1911.90),
    ("2022-05-01", 1837.40),
    ("2022-06-01", 1817.00),
    ("2022-07-01", 1764.40),
    ("2022-08-01", 1721.65),
    ("2022-09-01", 1661.60),
    ("2022-10-01", 1638.85),
    ("2022-11-01", 1632.20),
    ("2022-12-01", 1800.90),
    ("2023-01-01", 1925.00),
    ("2023-02-01", 1859.80),
    ("2023-03-01", 1988.55),
    ("2023-04-01", 2048.25),
    ("2023-05-01", 2050.50),
    ("2023-06-01", 1912.85),
    ("2023-07-01", 1931.75),
    ("2023-08-01", 1943.70),
    ("2023-09-01", 1864.40),
    ("2023-10-01", 1984.85),
    ("2023-11-01", 2039.60),
    ("2023-12-01", 2078.40),
    ("2024-01-01", 2063.73),
    ("2024-02-01", 2065.15),
    ("2024-03-01", 2232.80),
    ("2024-04-01", 2330.00),
    ("2024-05-01", 2387.85),
    ("2024-06-01", 2326.55),
    ("2024-07-01", 2401.85),
    ("2024-08-01", 2509.65),
    ("2024-09-01", 2658.45),
    ("2024-10-01", 2734.00),
    ("2024-11-01", 2790.50),
    ("2024-12-01", 2820.75),
    ("2025-01-01", 2885.20),
    ("2025-02-01", 2920.45),
    ("2025-03-01", 2975.80),
    ("2025-04-01", 3045.30),
    ("2025-05-01", 3125.60),
    ("2025-06-01", 3210.90),
    ("2025-07-01", 3315.40),
    ("2025-08-01", 3425.75),
    ("2025-09-01", 3550.20),
    ("2025-10-01", 3897.50),
    ("2025-10-02", 3868.10),
    ("2025-10-03", 3908.90),
    ("2025-10-06", 3976.30),
    ("2025-10-07", 4004.40),
    ("2025-10-08", 4070.50),
    ("2025-10-09", 3972.60),
    ("2025-10-10", 4000.40),
    ("2025-10-13", 4133.00),
    ("2025-10-14", 4163.40),
    ("2025-10-15", 4201.60),
    ("2025-10-16", 4304.60),
    ("2025-10-17", 4213.30),
    ("2025-10-20", 4359.40),
    ("2025-10-21", 4109.10),
    ("2025-10-22", 4065.40),
    ("2025-10-23", 4145.60),
    ("2025-10-24", 4137.80),
    ("2025-10-26", 4078.50),
    ("2025-10-27", 4012.91),
    ("2025-10-28", 3974.01),
];

const SP500_LEVELS: &[(&str, f64)] = &[
    ("2000-01-01", 1469.25),
    ("2000-06-01", 1454.60),
    ("2001-01-01", 1320.28),
    ("2001-06-01", 1224.42),
    ("2001-09-01", 1040.94),
    ("2002-01-01", 1147.39),
    ("2002-06-01", 989.82),
    ("2002-10-01", 885.76),
    ("2003-01-01", 879.82),
    ("2003-06-01", 974.50),
    ("2003-12-01", 1111.92),
    ("2004-01-01", 1131.13),
    ("2004-06-01", 1140.84),
    ("2004-12-01", 1211.92),
    ("2005-01-01", 1211.92),
    ("2005-06-01", 1191.33),
    ("2005-12-01", 1248.29),
    ("2006-01-01", 1418.30),
    ("2006-06-01", 1270.20),
    ("2006-12-01", 1418.30),
    ("2007-01-01", 1468.36),
    ("2007-06-01", 1503.35),
    ("2007-10-01", 1549.38),
    ("2007-12-01", 1468.36),
    ("2008-01-01", 1378.55),
    ("2008-03-01", 1322.70),
    ("2008-06-01", 1280.00),
    ("2008-09-01", 1166.36),
    ("2008-10-01", 968.75),
    ("2008-12-01", 903.25),
    ("2009-01-01", 903.25),
    ("2009-03-01", 797.87),
    ("2009-06-01", 919.32),
    ("2009-12-01", 1115.10),
    ("2010-01-01", 1115.10),
    ("2010-06-01", 1030.71),
    ("2010-12-01", 1257.64),
    ("2011-01-01", 1257.64),
    ("2011-06-01", 1320.64),
    ("2011-08-01", 1218.89),
    ("2011-12-01", 1257.60),
    ("2012-01-01", 1426.19),
    ("2012-06-01", 1362.16),
    ("2012-12-01", 1426.19),
    ("2013-01-01", 1848.36),
    ("2013-06-01", 1606.28),
    ("2013-12-01", 1848.36),
    ("2014-01-01", 2058.90),
    ("2014-06-01", 1960.23),
    ("2014-12-01", 2058.90),
    ("2015-01-01", 2043.94),
    ("2015-06-01", 2063.11),
    ("2015-08-01", 1972.18),
    ("2015-12-01", 2043.94),
    ("2016-01-01", 2238.83),
    ("2016-02-01", 1932.23),
    ("2016-06-01", 2098.86),
    ("2016-11-01", 2198.81),
    ("2016-12-01", 2238.83),
    ("2017-01-01", 2673.61),
    ("2017-06-01", 2423.41),
    ("2017-12-01", 2673.61),
    ("2018-01-01", 2506.85),
    ("2018-02-01", 2713.83),
    ("2018-06-01", 2718.37),
    ("2018-10-01", 2711.74),
    ("2018-12-01", 2506.85),
    ("2019-01-01", 3230.78),
    ("2019-06-01", 2941.76),
    ("2019-12-01", 3230.78),
    ("2020-01-01", 3257.85),
    ("2020-02-01", 3380.16),
    ("2020-03-01", 2584.59),
    ("2020-04-01", 2912.43),
    ("2020-06-01", 3100.29),
    ("2020-08-01", 3500.31),
    ("2020-09-01", 3363.00),
    ("2020-11-01", 3621.63),
    ("2020-12-01", 3756.07),
    ("2021-01-01", 4766.18),
    ("2021-03-01", 3972.89),
    ("2021-06-01", 4297.50),
    ("2021-09-01", 4395.26),
    ("2021-12-01", 4766.18),
    ("2022-01-01", 4515.55),
    ("2022-03-01", 4530.41),
    ("2022-06-01", 3785.38),
    ("2022-09-01", 3585.62),
    ("2022-10-01", 3871.98),
    ("2022-12-01", 3839.50),
    ("2023-01-01", 4076.60),
    ("2023-03-01", 4109.31),
    ("2023-06-01", 4450.38),
    ("2023-09-01", 4288.05),
    ("2023-12-01", 4769.83),
    ("2024-01-01", 4783.35),
    ("2024-03-01", 5254.35),
    ("2024-06-01", 5460.48),
    ("2024-09-01", 5762.48),
    ("2024-10-01", 5705.45),
    ("2024-11-01", 5820.30),
    ("2024-12-01", 5935.75),
    ("2025-01-01", 6015.20),
    ("2025-02-01", 6105.40),
    ("2025-03-01", 6245.85),
    ("2025-04-01", 6320.60),
    ("2025-05-01", 6410.25),
    ("2025-06-01", 6525.90),
    ("2025-07-01", 6645.30),
    ("2025-08-01", 6735.50),
    ("2025-09-01", 6850.20),
    ("2025-10-01", 6925.75),
];

/// Year-over-year percent change
const CPI_YOY: &[(&str, f64)] = &[
    ("2000-01-01", 3.38),
    ("2000-06-01", 3.73),
    ("2001-01-01", 2.83),
    ("2001-06-01", 3.25),
    ("2002-01-01", 1.59),
    ("2002-06-01", 1.07),
    ("2003-01-01", 2.27),
    ("2003-06-01", 2.11),
    ("2004-01-01", 2.68),
    ("2004-06-01", 3.27),
    ("2005-01-01", 3.39),
    ("2005-06-01", 2.91),
    ("2006-01-01", 3.23),
    ("2006-06-01", 4.32),
    ("2007-01-01", 2.85),
    ("2007-06-01", 2.69),
    ("2008-01-01", 3.84),
    ("2008-06-01", 5.02),
    ("2008-09-01", 4.94),
    ("2008-12-01", 0.09),
    ("2009-01-01", -0.36),
    ("2009-06-01", -1.43),
    ("2010-01-01", 1.64),
    ("2010-06-01", 1.05),
    ("2011-01-01", 3.16),
    ("2011-06-01", 3.56),
    ("2012-01-01", 2.07),
    ("2012-06-01", 1.66),
    ("2013-01-01", 1.46),
    ("2013-06-01", 1.81),
    ("2014-01-01", 1.62),
    ("2014-06-01", 2.07),
    ("2015-01-01", 0.12),
    ("2015-06-01", 0.12),
    ("2016-01-01", 1.26),
    ("2016-06-01", 1.01),
    ("2017-01-01", 2.13),
    ("2017-06-01", 1.63),
    ("2018-01-01", 2.44),
    ("2018-06-01", 2.87),
    ("2019-01-01", 1.81),
    ("2019-06-01", 1.65),
    ("2020-01-01", 1.23),
    ("2020-06-01", 0.65),
    ("2020-12-01", 1.36),
    ("2021-01-01", 4.70),
    ("2021-06-01", 5.39),
    ("2021-12-01", 7.04),
    ("2022-01-01", 8.00),
    ("2022-06-01", 9.06),
    ("2022-09-01", 8.20),
    ("2022-12-01", 6.45),
    ("2023-01-01", 4.05),
    ("2023-06-01", 3.00),
    ("2023-12-01", 3.35),
    ("2024-01-01", 2.97),
    ("2024-06-01", 2.97),
    ("2024-09-01", 2.44),
    ("2024-10-01", 2.35),
    ("2024-11-01", 2.28),
    ("2024-12-01", 2.40),
    ("2025-01-01", 2.50),
    ("2025-02-01", 2.45),
    ("2025-03-01", 2.38),
    ("2025-04-01", 2.42),
    ("2025-05-01", 2.35),
    ("2025-06-01", 2.30),
    ("2025-07-01", 2.25),
    ("2025-08-01", 2.20),
    ("2025-09-01", 2.15),
    ("2025-10-01", 2.10),
];

const GOLD_VOLATILITY: &[(&str, f64)] = &[
    ("2008-01-01", 18.0),
    ("2009-01-01", 16.0),
    ("2010-01-01", 14.0),
    ("2011-01-01", 19.0),
    ("2012-01-01", 15.0),
    ("2013-01-01", 17.0),
    ("2014-01-01", 13.0),
    ("2015-01-01", 14.0),
    ("2016-01-01", 16.0),
    ("2017-01-01", 12.0),
    ("2018-01-01", 13.0),
    ("2019-01-01", 14.0),
    ("2020-01-01", 22.0),
    ("2021-01-01", 16.0),
    ("2022-01-01", 18.0),
    ("2023-01-01", 15.0),
    ("2024-01-01", 14.0),
    ("2025-01-01", 19.0),
];

const SP500_VOLATILITY: &[(&str, f64)] = &[
    ("2008-01-01", 35.0),
    ("2009-01-01", 28.0),
    ("2010-01-01", 22.0),
    ("2011-01-01", 25.0),
    ("2012-01-01", 18.0),
    ("2013-01-01", 15.0),
    ("2014-01-01", 14.0),
    ("2015-01-01", 17.0),
    ("2016-01-01", 19.0),
    ("2017-01-01", 11.0),
    ("2018-01-01", 20.0),
    ("2019-01-01", 16.0),
    ("2020-01-01", 38.0),
    ("2021-01-01", 20.0),
    ("2022-01-01", 25.0),
    ("2023-01-01", 19.0),
    ("2024-01-01", 17.0),
    ("2025-01-01", 23.0),
];

const EVENTS: &[EventRecord] = &[
    EventRecord {
        date: "2008-09-01",
        title: "Lehman Brothers Collapse",
        description: "2008 Financial Crisis - Stock market crashed, gold surged as safe haven",
        color: "rgba(255, 68, 68, 0.3)",
        gold_price: 884.50,
        equity_level: 1166.36,
    },
    EventRecord {
        date: "2020-03-01",
        title: "COVID-19 Pandemic",
        description: "Global pandemic causes market turmoil and flight to safety",
        color: "rgba(255, 68, 68, 0.3)",
        gold_price: 1622.10,
        equity_level: 2584.59,
    },
    EventRecord {
        date: "2025-10-20",
        title: "Gold Reaches Record High",
        description: "Gold surges to all-time high of $4,359 amid economic uncertainty and geopolitical tensions",
        color: "rgba(68, 255, 68, 0.3)",
        gold_price: 4359.40,
        equity_level: 6925.75,
    },
    EventRecord {
        date: "2022-03-01",
        title: "Russia-Ukraine War",
        description: "Geopolitical tensions spike, gold rises as uncertainty hedge",
        color: "rgba(255, 68, 68, 0.3)",
        gold_price: 2043.30,
        equity_level: 4530.41,
    },
    EventRecord {
        date: "2025-04-01",
        title: "Trump's Tarrifs",
        description: "Tariff concerns and trade tensions boost gold to new highs",
        color: "rgba(255, 165, 0, 0.3)",
        gold_price: 2734.00,
        equity_level: 5705.45,
    },
];
