use async_trait::async_trait;
use futures::try_join;

use crate::error::GatewayError;
use crate::mcp::tools::Tool;
use crate::mcp::types::{
    GetPersonDetailsInput, PersonDetailsOutput, PersonListOutput, SearchPersonInput,
};
use crate::normalize;
use crate::provider::MovieProvider;

pub struct SearchPerson;

#[async_trait]
impl Tool for SearchPerson {
    type Input = SearchPersonInput;
    type Output = PersonListOutput;

    const NAME: &'static str = "search_person";
    const DESCRIPTION: &'static str = "Search for actors, directors, producers, or other people in the film industry by name. Use when users ask about a specific person, actor, or director. Returns person ID, name, known for (department plus up to three notable works), and profile image. Required when you need a person's ID for getting their detailed filmography with get_person_details.";

    async fn run(
        &self,
        provider: &dyn MovieProvider,
        input: SearchPersonInput,
    ) -> Result<PersonListOutput, GatewayError> {
        let records = provider
            .search_people(&input.query)
            .await
            .map_err(GatewayError::upstream("failed to search person"))?;

        Ok(PersonListOutput::counted(
            records.iter().map(normalize::person_summary).collect(),
        ))
    }
}

pub struct GetPersonDetails;

#[async_trait]
impl Tool for GetPersonDetails {
    type Input = GetPersonDetailsInput;
    type Output = PersonDetailsOutput;

    const NAME: &'static str = "get_person_details";
    const DESCRIPTION: &'static str = "Get detailed information about a person including biography, birthday, and filmography (acting roles plus directing, producing and writing credits, up to 20). Use when users want to know more about an actor or director, their background, or what movies they've been in. Requires person ID from search_person.";

    async fn run(
        &self,
        provider: &dyn MovieProvider,
        input: GetPersonDetailsInput,
    ) -> Result<PersonDetailsOutput, GatewayError> {
        // No data dependency between the two calls; both must succeed.
        let profile = async {
            provider
                .person_details(input.person_id)
                .await
                .map_err(GatewayError::upstream("failed to get person details"))
        };
        let credits = async {
            provider
                .person_movie_credits(input.person_id)
                .await
                .map_err(GatewayError::upstream("failed to get person movie credits"))
        };
        let (person, credits) = try_join!(profile, credits)?;

        Ok(PersonDetailsOutput {
            person: normalize::person_details(person, credits),
        })
    }
}
