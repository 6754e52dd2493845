//! Prompt construction for the classification oracle

/// Standing instruction defining the oracle's role and reply format
pub(crate) const INSTRUCTION: &str = r#"You are an AWS architecture expert specialized in classifying AWS API operations.
Your task is to classify AWS API operations into two categories:
1. CONTROL_PLANE: Operations that manage AWS infrastructure (create, configure, delete resources)
2. DATA_PLANE: Operations that work with data within existing resources

Respond with ONLY valid JSON in this format:
{
  "control_plane": ["operation1", "operation2"],
  "data_plane": ["operation3", "operation4"]
}

Ensure every operation from the input list appears in exactly one category."#;

/// Build the user payload for one classification batch
///
/// The payload restates both category definitions with worked examples and
/// tie-breaking rules, then names the service and the comma-joined batch.
pub fn build_classification_input(service_name: &str, operations: &[String]) -> String {
    let operation_list = operations.join(", ");

    format!(
        r#"You are an AWS architecture expert. Your task is to classify AWS API operations into two categories based on their primary purpose in cloud infrastructure management.

## CLASSIFICATION CATEGORIES:

**CONTROL_PLANE**: Operations that manage the AWS infrastructure itself - creating, configuring, deleting, or modifying AWS resources and their settings. These operations affect the structure, permissions, configuration, or existence of AWS resources.

**DATA_PLANE**: Operations that work with data stored within existing AWS resources. These operations read, write, query, or manipulate application data but do not change the underlying resource configuration.

## DETAILED CLASSIFICATION RULES:

### CONTROL_PLANE Operations:
- **Resource Lifecycle**: Create*, Delete*, Update* operations that manage resource existence
- **Resource Configuration**: Put*Policy, Put*Configuration, Update*Settings, Modify*Attributes
- **Resource Permissions**: Attach*, Detach*, Associate*, Disassociate* permissions/policies
- **Resource Metadata**: Tag/Untag operations, Update*Tags
- **Infrastructure Management**: Enable*, Disable*, Start*, Stop*, Restart* services
- **Access Control**: Operations that grant/revoke access to resources
- **Monitoring Setup**: Put*MetricFilter, Create*Alarm, Put*Retention

### DATA_PLANE Operations:
- **Data Access**: Get*, Describe*, List* data within resources (not resource configuration)
- **Data Manipulation**: Put*, Post*, Update*, Delete* data items/objects (not resources)
- **Data Queries**: Query*, Scan*, Search*, Select* operations
- **Data Streaming**: Read*, Write* streams, Consume*, Produce* messages
- **Data Processing**: Execute*, Invoke*, Process*, Transform* operations on data
- **Data Transfer**: Upload*, Download*, Import*, Export* data content
- **Transactional Operations**: Begin*, Commit*, Rollback* data transactions

## SERVICE-SPECIFIC EXAMPLES:

**DynamoDB**:
- CONTROL_PLANE: CreateTable, DeleteTable, UpdateTable, TagResource
- DATA_PLANE: GetItem, PutItem (inserts data), Query, Scan, UpdateItem (modifies data), DeleteItem (removes data)

**S3**:
- CONTROL_PLANE: CreateBucket, DeleteBucket, PutBucketPolicy, PutBucketEncryption, PutBucketVersioning
- DATA_PLANE: GetObject, PutObject, DeleteObject, ListObjects, CopyObject, HeadObject

**IAM**:
- CONTROL_PLANE: CreateRole, DeleteRole, AttachRolePolicy, CreateUser, CreatePolicy, TagRole
- DATA_PLANE: GetUser, GetRole, ListUsers, ListRoles, GetPolicy (reading existing configurations)

**Lambda**:
- CONTROL_PLANE: CreateFunction, DeleteFunction, UpdateFunctionCode, PutProvisionedConcurrencyConfig
- DATA_PLANE: Invoke, InvokeAsync (executing the function with data)

**EC2**:
- CONTROL_PLANE: RunInstances, TerminateInstances, CreateSecurityGroup, AuthorizeSecurityGroupIngress
- DATA_PLANE: DescribeInstances, DescribeImages, GetConsoleOutput (reading instance data)

**RDS**:
- CONTROL_PLANE: CreateDBInstance, DeleteDBInstance, ModifyDBInstance, CreateDBSnapshot
- DATA_PLANE: DescribeDBInstances, DescribeDBSnapshots (reading database metadata)

## EDGE CASES AND GUIDANCE:

1. **Describe Operations**:
   - CONTROL_PLANE if describing resource configuration (DescribeTable schema, DescribeSecurityGroups)
   - DATA_PLANE if describing data content (DescribeStream data, DescribeLogEvents)

2. **List Operations**:
   - CONTROL_PLANE if listing resources (ListTables, ListBuckets, ListFunctions)
   - DATA_PLANE if listing data within resources (ListObjects in bucket, ListStreams data)

3. **Update Operations**:
   - CONTROL_PLANE if updating resource configuration (UpdateTable provisioning, UpdateFunctionConfiguration)
   - DATA_PLANE if updating data content (UpdateItem in table, UpdateRecord in stream)

4. **Ambiguous Cases**: When in doubt, classify as DATA_PLANE as these operations are typically more common.

## TASK:
Classify these {service_name} service operations: {operation_list}

## OUTPUT FORMAT:
Respond with ONLY valid JSON in exactly this format:
{{
  "control_plane": ["operation1", "operation2"],
  "data_plane": ["operation3", "operation4"]
}}

Ensure every operation from the input list appears in exactly one category. Do not add explanations or additional text."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_names_service_and_operations() {
        let input = build_classification_input(
            "dynamodb",
            &["CreateTable".to_string(), "Query".to_string()],
        );

        assert!(input.contains("Classify these dynamodb service operations: CreateTable, Query"));
        assert!(input.contains("When in doubt, classify as DATA_PLANE"));
    }

    #[test]
    fn test_instruction_pins_reply_format() {
        assert!(INSTRUCTION.contains(r#""control_plane""#));
        assert!(INSTRUCTION.contains(r#""data_plane""#));
    }
}
