//! GraphQL documents sent to the GitHub API

/// All items of a user's project board, one page at a time
pub const PROJECT_ITEMS: &str = r"
query($login: String!, $num: Int!, $first: Int!, $after: String) {
  user(login: $login) {
    projectV2(number: $num) {
      title
      items(first: $first, after: $after) {
        pageInfo { hasNextPage endCursor }
        nodes {
          content {
            __typename
            ... on Issue {
              title
              closedAt
              milestone { title dueOn }
            }
            ... on PullRequest {
              title
              closedAt
              milestone { title dueOn }
            }
            ... on DraftIssue {
              title
            }
          }
          fieldValues(first: 20) {
            nodes {
              __typename
              ... on ProjectV2ItemFieldTextValue { text field { ... on ProjectV2FieldCommon { name } } }
              ... on ProjectV2ItemFieldDateValue { date field { ... on ProjectV2FieldCommon { name } } }
              ... on ProjectV2ItemFieldSingleSelectValue { name field { ... on ProjectV2FieldCommon { name } } }
              ... on ProjectV2ItemFieldMilestoneValue { milestone { title dueOn } field { ... on ProjectV2FieldCommon { name } } }
              ... on ProjectV2ItemFieldIterationValue { title startDate duration field { ... on ProjectV2FieldCommon { name } } }
            }
          }
        }
      }
    }
  }
}
";

/// Open and closed milestones of a repository (first 100)
pub const REPO_MILESTONES: &str = r"
query($owner: String!, $repo: String!) {
  repository(owner: $owner, name: $repo) {
    milestones(first: 100, states: [OPEN, CLOSED]) {
      nodes {
        title
        dueOn
      }
    }
  }
}
";
