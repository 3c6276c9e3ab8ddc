//! In-memory repository doubles shared by the use case tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::gateways::{HeroPowerRepository, HeroRepository, PowerRepository};
use crate::domain::models::{
    Hero, HeroAssignment, HeroId, HeroPower, HeroPowerId, NewHero, NewHeroPower, NewPower, Power,
    PowerAssignment, PowerId, Strength,
};
use crate::shared::errors::RepositoryError;

pub fn hero(id: i64, name: &str, super_name: &str) -> Hero {
    Hero::restore(HeroId::new(id), name.to_string(), super_name.to_string())
}

pub fn power(id: i64, name: &str, description: &str) -> Power {
    Power::restore(PowerId::new(id), name.to_string(), description.to_string())
}

pub fn link(id: i64, strength: Strength, hero: &Hero, power: &Power) -> HeroPower {
    HeroPower::restore(HeroPowerId::new(id), strength, hero.id(), power.id())
}

fn storage_fault() -> RepositoryError {
    RepositoryError::Database(sqlx::Error::PoolTimedOut)
}

#[derive(Default)]
pub struct MockHeroRepository {
    heroes: Mutex<Vec<Hero>>,
    failing: bool,
}

impl MockHeroRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heroes(heroes: Vec<Hero>) -> Self {
        Self {
            heroes: Mutex::new(heroes),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            heroes: Mutex::new(vec![]),
            failing: true,
        }
    }

    pub fn count(&self) -> usize {
        self.heroes.lock().unwrap().len()
    }
}

#[async_trait]
impl HeroRepository for MockHeroRepository {
    async fn find_by_id(&self, id: HeroId) -> Result<Option<Hero>, RepositoryError> {
        if self.failing {
            return Err(storage_fault());
        }
        Ok(self.heroes.lock().unwrap().iter().find(|h| h.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Hero>, RepositoryError> {
        if self.failing {
            return Err(storage_fault());
        }
        Ok(self.heroes.lock().unwrap().clone())
    }

    async fn create(&self, hero: &NewHero) -> Result<Hero, RepositoryError> {
        if self.failing {
            return Err(storage_fault());
        }
        let mut heroes = self.heroes.lock().unwrap();
        let id = i64::try_from(heroes.len()).unwrap() + 1;
        let created = Hero::restore(
            HeroId::new(id),
            hero.name().to_string(),
            hero.super_name().to_string(),
        );
        heroes.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: HeroId) -> Result<bool, RepositoryError> {
        if self.failing {
            return Err(storage_fault());
        }
        let mut heroes = self.heroes.lock().unwrap();
        let before = heroes.len();
        heroes.retain(|h| h.id() != id);
        Ok(heroes.len() < before)
    }
}

#[derive(Default)]
pub struct MockPowerRepository {
    powers: Mutex<Vec<Power>>,
    failing: bool,
}

impl MockPowerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_powers(powers: Vec<Power>) -> Self {
        Self {
            powers: Mutex::new(powers),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            powers: Mutex::new(vec![]),
            failing: true,
        }
    }

    pub fn count(&self) -> usize {
        self.powers.lock().unwrap().len()
    }
}

#[async_trait]
impl PowerRepository for MockPowerRepository {
    async fn find_by_id(&self, id: PowerId) -> Result<Option<Power>, RepositoryError> {
        if self.failing {
            return Err(storage_fault());
        }
        Ok(self.powers.lock().unwrap().iter().find(|p| p.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Power>, RepositoryError> {
        if self.failing {
            return Err(storage_fault());
        }
        Ok(self.powers.lock().unwrap().clone())
    }

    async fn create(&self, power: &NewPower) -> Result<Power, RepositoryError> {
        if self.failing {
            return Err(storage_fault());
        }
        let mut powers = self.powers.lock().unwrap();
        let id = i64::try_from(powers.len()).unwrap() + 1;
        let created = Power::restore(
            PowerId::new(id),
            power.name().to_string(),
            power.description().to_string(),
        );
        powers.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: PowerId) -> Result<bool, RepositoryError> {
        if self.failing {
            return Err(storage_fault());
        }
        let mut powers = self.powers.lock().unwrap();
        let before = powers.len();
        powers.retain(|p| p.id() != id);
        Ok(powers.len() < before)
    }
}

/// Holds `(association, hero, power)` triples and answers joins from them
#[derive(Default)]
pub struct MockHeroPowerRepository {
    links: Mutex<Vec<(HeroPower, Hero, Power)>>,
    create_result: Mutex<Option<Result<HeroPower, RepositoryError>>>,
}

impl MockHeroPowerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_links(links: Vec<(HeroPower, Hero, Power)>) -> Self {
        Self {
            links: Mutex::new(links),
            create_result: Mutex::new(None),
        }
    }

    pub fn with_create(self, result: Result<HeroPower, RepositoryError>) -> Self {
        *self.create_result.lock().unwrap() = Some(result);
        self
    }

    pub fn created(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl HeroPowerRepository for MockHeroPowerRepository {
    async fn create(&self, hero_power: &NewHeroPower) -> Result<HeroPower, RepositoryError> {
        if let Some(result) = self.create_result.lock().unwrap().take() {
            return result;
        }
        let mut links = self.links.lock().unwrap();
        let id = i64::try_from(links.len()).unwrap() + 1;
        let created = HeroPower::restore(
            HeroPowerId::new(id),
            hero_power.strength(),
            hero_power.hero_id(),
            hero_power.power_id(),
        );
        let hero = Hero::restore(hero_power.hero_id(), String::new(), String::new());
        let power = Power::restore(hero_power.power_id(), String::new(), String::new());
        links.push((created.clone(), hero, power));
        Ok(created)
    }

    async fn find_by_hero(&self, hero_id: HeroId) -> Result<Vec<PowerAssignment>, RepositoryError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|(hp, _, _)| hp.hero_id() == hero_id)
            .map(|(hp, _, power)| PowerAssignment {
                hero_power: hp.clone(),
                power: power.clone(),
            })
            .collect())
    }

    async fn find_by_power(&self, power_id: PowerId) -> Result<Vec<HeroAssignment>, RepositoryError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|(hp, _, _)| hp.power_id() == power_id)
            .map(|(hp, hero, _)| HeroAssignment {
                hero_power: hp.clone(),
                hero: hero.clone(),
            })
            .collect())
    }
}
