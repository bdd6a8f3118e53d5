//! User factory

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use super::{pick, random_from_charset};
use crate::constants::{self, characters, date_ranges, validation};
use crate::types::{Title, UserDetails};

/// Field overrides for [`UserFactory::create_user`]
#[derive(Debug, Clone, Default)]
pub struct UserOverrides {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    /// Full display name; defaults to "first last"
    pub name: Option<String>,
    pub email: Option<String>,
    /// Domain for a generated email; ignored when `email` is set
    pub email_domain: Option<String>,
    pub password: Option<String>,
    pub title: Option<Title>,
    pub company: Option<String>,
    pub address2: Option<Option<String>>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub mobile_number: Option<String>,
    pub newsletter: Option<bool>,
    pub special_offers: Option<bool>,
}

/// Builds randomised user accounts
pub struct UserFactory<R = ThreadRng> {
    rng: R,
}

impl UserFactory<ThreadRng> {
    pub fn new() -> Self {
        Self::from_rng(rand::thread_rng())
    }
}

impl Default for UserFactory<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> UserFactory<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Build a user, caller overrides winning over random defaults
    pub fn create_user(&mut self, overrides: UserOverrides) -> UserDetails {
        let firstname = overrides
            .firstname
            .unwrap_or_else(|| pick(&mut self.rng, constants::FIRST_NAMES).to_string());
        let lastname = overrides
            .lastname
            .unwrap_or_else(|| pick(&mut self.rng, constants::LAST_NAMES).to_string());
        let name = overrides
            .name
            .unwrap_or_else(|| format!("{} {}", firstname, lastname));

        let email = match overrides.email {
            Some(email) => email,
            None => {
                let domain = match overrides.email_domain {
                    Some(domain) => domain,
                    None => pick(&mut self.rng, constants::EMAIL_DOMAINS).to_string(),
                };
                self.unique_email(&firstname, &lastname, &domain)
            }
        };

        let password = overrides
            .password
            .unwrap_or_else(|| self.generate_password(validation::password::GENERATED_LENGTH));
        let title = overrides.title.unwrap_or_else(|| {
            if self.rng.gen_bool(0.5) {
                Title::Mr
            } else {
                Title::Mrs
            }
        });

        let birth_date = self.rng.gen_range(1..=date_ranges::BIRTH_DAY_MAX).to_string();
        let birth_month = pick(&mut self.rng, constants::MONTHS).to_string();
        let birth_year = self
            .rng
            .gen_range(date_ranges::BIRTH_YEAR_MIN..=date_ranges::BIRTH_YEAR_MAX)
            .to_string();

        let company = overrides
            .company
            .unwrap_or_else(|| pick(&mut self.rng, constants::COMPANIES).to_string());
        let address1 = format!(
            "{} {}",
            self.house_number(),
            pick(&mut self.rng, constants::STREET_NAMES)
        );
        let address2 = match overrides.address2 {
            Some(address2) => address2,
            None => {
                let prefix = pick(&mut self.rng, constants::ADDRESS_LINE2_PREFIXES);
                Some(format!("{} {}", prefix, self.house_number()))
            }
        };

        let country = overrides
            .country
            .unwrap_or_else(|| pick(&mut self.rng, constants::COUNTRIES).to_string());
        let zipcode = overrides.zipcode.unwrap_or_else(|| {
            self.rng
                .gen_range(validation::zipcode::MIN..=validation::zipcode::MAX)
                .to_string()
        });
        let state = match overrides.state {
            Some(state) => state,
            None => constants::STATES
                .choose(&mut self.rng)
                .cloned()
                .unwrap_or_default(),
        };
        let city = overrides
            .city
            .unwrap_or_else(|| pick(&mut self.rng, constants::CITIES).to_string());
        let mobile_number = overrides
            .mobile_number
            .unwrap_or_else(|| self.mobile_number());

        let newsletter = overrides.newsletter.unwrap_or_else(|| self.rng.gen_bool(0.5));
        let special_offers = overrides
            .special_offers
            .unwrap_or_else(|| self.rng.gen_bool(0.5));

        trace!(%email, %country, "generated user");

        UserDetails {
            name,
            email,
            password,
            title,
            birth_date,
            birth_month,
            birth_year,
            firstname,
            lastname,
            company,
            address1,
            address2,
            country,
            zipcode,
            state,
            city,
            mobile_number,
            newsletter,
            special_offers,
        }
    }

    /// Email of the form `first.last.<uuid>@domain`
    ///
    /// The UUID comes from this factory's RNG, so seeded factories stay
    /// reproducible while batches still never share an address in practice.
    pub fn unique_email(&mut self, firstname: &str, lastname: &str, domain: &str) -> String {
        let id = uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid();
        format!(
            "{}.{}.{}@{}",
            firstname.to_lowercase(),
            lastname.to_lowercase(),
            id.simple(),
            domain
        )
    }

    /// Password of `length` characters with at least one of every required
    /// character class
    pub fn generate_password(&mut self, length: usize) -> String {
        let length = length.max(validation::password::MIN_LENGTH);
        let mut required = Vec::new();
        if validation::password::REQUIRES_UPPERCASE {
            required.push(characters::UPPERCASE);
        }
        if validation::password::REQUIRES_LOWERCASE {
            required.push(characters::LOWERCASE);
        }
        if validation::password::REQUIRES_NUMBERS {
            required.push(characters::NUMBERS);
        }
        if validation::password::REQUIRES_SPECIAL {
            required.push(characters::SPECIAL);
        }

        let mut chars: Vec<char> = required
            .iter()
            .flat_map(|set| random_from_charset(&mut self.rng, set, 1).chars().collect::<Vec<_>>())
            .collect();

        let all = [
            characters::UPPERCASE,
            characters::LOWERCASE,
            characters::NUMBERS,
            characters::SPECIAL,
        ]
        .concat();
        let remaining = length.saturating_sub(chars.len());
        chars.extend(random_from_charset(&mut self.rng, &all, remaining).chars());
        chars.shuffle(&mut self.rng);

        chars.into_iter().collect()
    }

    /// Out-of-policy user for negative registration tests
    pub fn invalid_user(&mut self) -> UserDetails {
        let bad_email = pick(&mut self.rng, constants::LAST_NAMES).to_lowercase();
        let bad_password = random_from_charset(&mut self.rng, characters::LOWERCASE, 3);
        self.create_user(UserOverrides {
            name: Some(String::new()),
            email: Some(bad_email),
            password: Some(bad_password),
            mobile_number: Some("phone".to_string()),
            ..Default::default()
        })
    }

    fn house_number(&mut self) -> u32 {
        let (min, max) = constants::HOUSE_NUMBER_RANGE;
        self.rng.gen_range(min..=max)
    }

    fn mobile_number(&mut self) -> String {
        let lead = self.rng.gen_range(1..=9u8);
        let rest = random_from_charset(
            &mut self.rng,
            characters::NUMBERS,
            validation::phone::MIN_LENGTH - 1,
        );
        format!("{}{}", lead, rest)
    }
}
