//! Label-keyed icon lookup.
//!
//! The registry is built once at startup and immutable afterwards; resolution
//! is a pure exact-match lookup on the display label. Labels without an entry
//! simply render without an icon, never an error.

use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub struct IconRegistry {
    icons: IndexMap<String, String>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::aws_defaults()
    }
}

impl IconRegistry {
    pub fn empty() -> Self {
        Self {
            icons: IndexMap::new(),
        }
    }

    /// Asset paths for the AWS service labels the assistant emits most.
    pub fn aws_defaults() -> Self {
        let entries = [
            ("API Gateway", "icons/aws/api-gateway.svg"),
            ("Lambda", "icons/aws/lambda.svg"),
            ("S3", "icons/aws/s3.svg"),
            ("Storage", "icons/aws/s3.svg"),
            ("DynamoDB", "icons/aws/dynamodb.svg"),
            ("EC2", "icons/aws/ec2.svg"),
            ("ECS", "icons/aws/ecs.svg"),
            ("EKS", "icons/aws/eks.svg"),
            ("RDS", "icons/aws/rds.svg"),
            ("Aurora", "icons/aws/aurora.svg"),
            ("ElastiCache", "icons/aws/elasticache.svg"),
            ("SQS", "icons/aws/sqs.svg"),
            ("SNS", "icons/aws/sns.svg"),
            ("EventBridge", "icons/aws/eventbridge.svg"),
            ("Kinesis", "icons/aws/kinesis.svg"),
            ("Step Functions", "icons/aws/step-functions.svg"),
            ("CloudFront", "icons/aws/cloudfront.svg"),
            ("Route 53", "icons/aws/route53.svg"),
            ("Cognito", "icons/aws/cognito.svg"),
            ("CloudWatch", "icons/aws/cloudwatch.svg"),
            ("VPC", "icons/aws/vpc.svg"),
            ("User", "icons/generic/user.svg"),
        ];
        Self {
            icons: entries
                .into_iter()
                .map(|(label, path)| (label.to_string(), path.to_string()))
                .collect(),
        }
    }

    /// Adds or replaces one entry; intended for host apps layering their own
    /// asset set over the defaults.
    pub fn with_icon(mut self, label: impl Into<String>, path: impl Into<String>) -> Self {
        self.icons.insert(label.into(), path.into());
        self
    }

    pub fn resolve(&self, label: &str) -> Option<&str> {
        self.icons.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
