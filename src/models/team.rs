use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Team {
    #[serde(rename = "RecordID")]
    pub id: u64,
    #[serde(rename = "TeamName")]
    pub name: String,
}

/// Body of `GET /get_teams`.
#[derive(Debug, Default, Deserialize)]
pub struct TeamDirectory {
    #[serde(rename = "Records", default)]
    pub records: Vec<Team>,
}

/// Returns `preferred` only if it names one of the loaded teams.
pub fn preselect<'a>(teams: &'a [Team], preferred: Option<&str>) -> Option<&'a Team> {
    let preferred = preferred?;
    teams.iter().find(|team| team.name == preferred)
}
