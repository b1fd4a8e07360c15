//! Pull-based evaluation kernel
//!
//! Requesting a profile resolves its dependencies first, each of which is
//! memoized, then runs the domain module exactly once. Every domain slot moves
//! `Uncomputed → Resolving → Computed` and never back out of `Computed`; a
//! request that finds its own domain still `Resolving` is a cycle and fails
//! immediately.

use sampling::{KeyedSource, SeededStream};
use tracing::{debug, trace};

use crate::authority::RandomnessAuthority;
use crate::config::NoiseConfig;
use crate::domain::Domain;
use crate::domains::{self, AtmosphericInputs, ChemistryInputs, DerivedInputs, DomainContext};
use crate::error::{Error, Result};
use crate::profile::{DomainProfile, Profile, WorldConstants};

/// Which domains each domain pulls before it runs
///
/// The default graph mirrors [`Domain::dependencies`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: [Vec<Domain>; Domain::COUNT],
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self {
            edges: Domain::ALL.map(|d| d.dependencies().to_vec()),
        }
    }
}

impl DependencyGraph {
    /// Adds `from → on`: resolving `from` first resolves `on`
    pub fn with_edge(mut self, from: Domain, on: Domain) -> Self {
        let deps = &mut self.edges[from.index()];
        if !deps.contains(&on) {
            deps.push(on);
        }
        self
    }

    pub fn dependencies(&self, domain: Domain) -> &[Domain] {
        &self.edges[domain.index()]
    }
}

#[derive(Debug, Clone)]
enum Slot {
    Uncomputed,
    Resolving,
    Computed(Profile),
}

/// Memoizing resolver over the six domains of one session
#[derive(Debug)]
pub struct Kernel<S = SeededStream> {
    authority: RandomnessAuthority<S>,
    noise: NoiseConfig,
    graph: DependencyGraph,
    slots: [Slot; Domain::COUNT],
    evaluations: [u32; Domain::COUNT],
    /// Domains currently being resolved, outermost first
    stack: Vec<Domain>,
}

impl<S: KeyedSource> Kernel<S> {
    pub fn new(authority: RandomnessAuthority<S>, noise: NoiseConfig) -> Self {
        Self::with_dependency_graph(authority, noise, DependencyGraph::default())
    }

    pub fn with_dependency_graph(
        authority: RandomnessAuthority<S>,
        noise: NoiseConfig,
        graph: DependencyGraph,
    ) -> Self {
        Self {
            authority,
            noise,
            graph,
            slots: std::array::from_fn(|_| Slot::Uncomputed),
            evaluations: [0; Domain::COUNT],
            stack: Vec::new(),
        }
    }

    pub fn authority(&self) -> &RandomnessAuthority<S> {
        &self.authority
    }

    /// The profile for `domain`, computing it and its dependencies on first use
    pub fn profile(&mut self, domain: Domain) -> Result<&Profile> {
        self.resolve(domain)?;
        match &self.slots[domain.index()] {
            Slot::Computed(profile) => Ok(profile),
            _ => Err(Error::Unresolved { domain }),
        }
    }

    /// [`profile`](Self::profile) by domain label
    ///
    /// An unknown name fails before anything is evaluated or cached.
    pub fn profile_by_name(&mut self, name: &str) -> Result<&Profile> {
        let domain: Domain = name.parse()?;
        self.profile(domain)
    }

    /// Typed profile access
    pub fn get<P: DomainProfile>(&mut self) -> Result<&P> {
        let profile = self.profile(P::DOMAIN)?;
        P::from_profile(profile).ok_or(Error::Unresolved { domain: P::DOMAIN })
    }

    /// Resolve every domain and collect the profiles
    pub fn all_constants(&mut self) -> Result<WorldConstants> {
        for domain in Domain::ALL {
            self.resolve(domain)?;
        }
        Ok(WorldConstants {
            cosmic: self.cached::<domains::CosmicProfile>()?.clone(),
            stellar: self.cached::<domains::StellarProfile>()?.clone(),
            planetary: self.cached::<domains::PlanetaryProfile>()?.clone(),
            atmospheric: self.cached::<domains::AtmosphericProfile>()?.clone(),
            chemistry: self.cached::<domains::ChemistryProfile>()?.clone(),
            derived: self.cached::<domains::DerivedProfile>()?.clone(),
        })
    }

    /// How many times the module for `domain` has run (0 or 1)
    pub fn evaluation_count(&self, domain: Domain) -> u32 {
        self.evaluations[domain.index()]
    }

    pub fn is_computed(&self, domain: Domain) -> bool {
        matches!(self.slots[domain.index()], Slot::Computed(_))
    }

    fn resolve(&mut self, domain: Domain) -> Result<()> {
        let idx = domain.index();
        match self.slots[idx] {
            Slot::Computed(_) => {
                trace!(%domain, "Profile cache hit");
                return Ok(());
            }
            Slot::Resolving => {
                let mut chain = self.stack.clone();
                chain.push(domain);
                return Err(Error::DependencyCycle { domain, chain });
            }
            Slot::Uncomputed => {}
        }

        self.slots[idx] = Slot::Resolving;
        self.stack.push(domain);
        let result = self.evaluate(domain);
        self.stack.pop();

        match result {
            Ok(profile) => {
                self.evaluations[idx] += 1;
                debug!(%domain, evaluations = self.evaluations[idx], "Profile evaluated");
                self.slots[idx] = Slot::Computed(profile);
                Ok(())
            }
            Err(err) => {
                self.slots[idx] = Slot::Uncomputed;
                Err(err)
            }
        }
    }

    fn evaluate(&mut self, domain: Domain) -> Result<Profile> {
        for dep in self.graph.dependencies(domain).to_vec() {
            self.resolve(dep)?;
        }

        let profile = match domain {
            Domain::Cosmic => Profile::Cosmic(domains::cosmic::generate(&mut self.context(domain))),
            Domain::Stellar => {
                Profile::Stellar(domains::stellar::generate(&mut self.context(domain)))
            }
            Domain::Planetary => {
                Profile::Planetary(domains::planetary::generate(&mut self.context(domain)))
            }
            Domain::Atmospheric => {
                let inputs =
                    AtmosphericInputs::new(self.cached()?, self.cached()?, self.cached()?);
                Profile::Atmospheric(domains::atmospheric::generate(
                    &mut self.context(domain),
                    &inputs,
                ))
            }
            Domain::Chemistry => {
                let inputs = ChemistryInputs::new(self.cached()?, self.cached()?, self.cached()?);
                Profile::Chemistry(domains::chemistry::generate(
                    &mut self.context(domain),
                    &inputs,
                ))
            }
            Domain::Derived => {
                let inputs = DerivedInputs::new(
                    self.cached()?,
                    self.cached()?,
                    self.cached()?,
                    self.cached()?,
                );
                let surface_noise = self.noise.surface_temperature_kelvin;
                Profile::Derived(domains::derived::generate(
                    &mut self.context(domain),
                    &inputs,
                    surface_noise,
                ))
            }
        };
        Ok(profile)
    }

    /// An already computed profile; never triggers evaluation
    fn cached<P: DomainProfile>(&self) -> Result<&P> {
        match &self.slots[P::DOMAIN.index()] {
            Slot::Computed(profile) => {
                P::from_profile(profile).ok_or(Error::Unresolved { domain: P::DOMAIN })
            }
            _ => Err(Error::Unresolved { domain: P::DOMAIN }),
        }
    }

    fn context(&mut self, domain: Domain) -> DomainContext<'_, S> {
        let sigma = self.noise.sigma(domain);
        let clamp_sigmas = self.noise.clamp_sigmas;
        let (stream, overrides) = self.authority.scoped(domain);
        DomainContext::new(stream, overrides, sigma, clamp_sigmas)
    }
}
