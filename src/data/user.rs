use convert_case::{Case, Casing};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
	Married,
	#[default]
	Unmarried,
}
impl MaritalStatus {
	pub fn all() -> [Self; 2] {
		[Self::Unmarried, Self::Married]
	}

	pub fn value(&self) -> &'static str {
		match self {
			Self::Married => "married",
			Self::Unmarried => "unmarried",
		}
	}

	/// Human facing label, e.g. for select options.
	pub fn label(&self) -> String {
		self.value().to_case(Case::Title)
	}
}
impl std::fmt::Display for MaritalStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.value())
	}
}
impl std::str::FromStr for MaritalStatus {
	type Err = UnknownMaritalStatus;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"married" => Ok(Self::Married),
			"unmarried" => Ok(Self::Unmarried),
			_ => Err(UnknownMaritalStatus(s.to_owned())),
		}
	}
}
/// Remote records are taken as they come: any casing is accepted and an
/// unrecognized or missing status reads as the default instead of failing the record.
impl<'de> Deserialize<'de> for MaritalStatus {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = Value::deserialize(deserializer)?;
		let status = match &value {
			Value::String(text) => text.parse::<Self>().unwrap_or_else(|err| {
				log::warn!(target: "users", "{err}, using {}", Self::default());
				Self::default()
			}),
			_ => Self::default(),
		};
		Ok(status)
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("unknown marital status {0:?}")]
pub struct UnknownMaritalStatus(pub String);

/// One entry in the user list.
///
/// Missing fields in a decoded record take the same defaults as an empty draft.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<usize>,
	pub first_name: String,
	pub last_name: String,
	pub username: String,
	#[serde(deserialize_with = "lenient_age")]
	pub age: i32,
	pub marital_status: MaritalStatus,
	pub is_employed: bool,
	pub is_founder: bool,
}
impl User {
	/// True when every field an add requires has some text in it.
	pub fn has_required_fields(&self) -> bool {
		!self.first_name.is_empty() && !self.last_name.is_empty() && !self.username.is_empty()
	}

	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}

	pub fn status_label(&self) -> String {
		let employment = match self.is_employed {
			true => "Employed",
			false => "Unemployed",
		};
		format!("{employment}, {}", self.marital_status)
	}

	pub fn founder_label(&self) -> &'static str {
		match self.is_founder {
			true => "Yes",
			false => "No",
		}
	}

	pub fn apply(&mut self, update: FieldUpdate) {
		match update {
			FieldUpdate::FirstName(value) => self.first_name = value,
			FieldUpdate::LastName(value) => self.last_name = value,
			FieldUpdate::Username(value) => self.username = value,
			FieldUpdate::Age(value) => self.age = value,
			FieldUpdate::MaritalStatus(value) => self.marital_status = value,
			FieldUpdate::Employed(value) => self.is_employed = value,
			FieldUpdate::Founder(value) => self.is_founder = value,
		}
	}
}

/// Whole part of a number, saturating at the bounds of `i32`; non-finite values read as zero.
fn truncate_age(value: f64) -> i32 {
	match value.is_finite() {
		true => value.trunc() as i32,
		false => 0,
	}
}

/// Accepts any JSON number (or numeric string) as an age, keeping its whole part.
fn lenient_age<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
	D: Deserializer<'de>,
{
	let age = match Value::deserialize(deserializer)? {
		Value::Number(number) => match number.as_i64() {
			Some(whole) => whole.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
			None => number.as_f64().map(truncate_age).unwrap_or(0),
		},
		Value::String(text) => text.trim().parse::<f64>().map(truncate_age).unwrap_or(0),
		_ => 0,
	};
	Ok(age)
}

/// A change to a single field of a form buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
	FirstName(String),
	LastName(String),
	Username(String),
	Age(i32),
	MaritalStatus(MaritalStatus),
	Employed(bool),
	Founder(bool),
}
impl FieldUpdate {
	/// Numeric inputs report their raw text, which may be fractional or in
	/// exponent form; the whole part is kept and anything unparsable counts as zero.
	pub fn age_from_input(value: &str) -> Self {
		Self::Age(value.trim().parse::<f64>().map(truncate_age).unwrap_or(0))
	}
}
